//! Shared application state

use std::sync::Arc;

use crate::service::EventService;
use crate::store::EventStore;

/// State shared by every request handler
pub struct AppState {
    /// The event service
    pub events: EventService,
}

impl AppState {
    /// Create a new AppState over the given store
    pub fn new(store: Arc<EventStore>) -> Self {
        Self {
            events: EventService::new(store),
        }
    }
}
