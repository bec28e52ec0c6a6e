//! EventHub API
//!
//! A minimal event-registration HTTP API. Clients create events and list
//! existing ones; the collection is persisted as a single JSON document.
//!
//! # Modules
//!
//! - `types`: Event record and create payload
//! - `validation`: Create payload checks
//! - `store`: Storage initializer and whole-document event store
//! - `service`: Create and list operations
//! - `api`: Axum router, handlers and error responses
//! - `config`: Environment configuration
//! - `utils`: Atomic writes, timestamps and event ids
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use event_hub::api::{create_router, AppState};
//! use event_hub::store::{EventStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let store = Arc::new(EventStore::new(StoreConfig::default()));
//!     store.initialize().await;
//!
//!     let app = create_router(Arc::new(AppState::new(store)));
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{EventError, EventResult, StoreError, ValidationError};
pub use service::EventService;
pub use store::{EventStore, StoreConfig};
pub use types::{CreateEventRequest, Event};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
