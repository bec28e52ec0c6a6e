//! Event Service - create and list operations
//!
//! Sits between the HTTP handlers and the store: validates payloads,
//! builds new records and hands them to the store.

use std::sync::Arc;

use tracing::info;

use crate::error::EventResult;
use crate::store::EventStore;
use crate::types::{CreateEventRequest, Event};
use crate::utils::id::EventIdGenerator;
use crate::validation::validate_create;

/// Event operations backed by an [`EventStore`]
pub struct EventService {
    store: Arc<EventStore>,
    ids: EventIdGenerator,
}

impl EventService {
    /// Create a new service over a store
    pub fn new(store: Arc<EventStore>) -> Self {
        Self {
            store,
            ids: EventIdGenerator::new(),
        }
    }

    /// Get the underlying store
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Validate a payload and persist a new upcoming event
    ///
    /// Nothing is written when validation fails.
    pub async fn create_event(&self, request: CreateEventRequest) -> EventResult<Event> {
        let fields = validate_create(&request)?;

        let event = Event::new(
            self.ids.next_id(),
            fields.title,
            fields.description,
            fields.date,
            fields.location,
            fields.max_attendees,
        );

        let event = self.store.append(event).await?;
        info!("Created event {} '{}'", event.event_id, event.title);
        Ok(event)
    }

    /// Return the full collection in stored order
    pub async fn list_events(&self) -> EventResult<Vec<Event>> {
        Ok(self.store.load().await?)
    }
}
