//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use super::rest::events;
use super::state::AppState;

/// Plaintext liveness message served at `/`
pub const ROOT_BANNER: &str = "EventHub API is running 🚀";

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // Any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .layer(cors)
        .with_state(state)
}

/// Root liveness endpoint
async fn root() -> &'static str {
    ROOT_BANNER
}
