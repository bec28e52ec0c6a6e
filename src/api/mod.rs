//! API module for HTTP endpoints
//!
//! This module exposes the event service over a small REST surface.

pub mod error;
pub mod http;
pub mod rest;
pub mod state;

pub use error::ApiError;
pub use http::{create_router, ROOT_BANNER};
pub use state::AppState;
