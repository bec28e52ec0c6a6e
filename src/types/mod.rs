//! Data types for the EventHub API
//!
//! This module contains the event record persisted in the events document and
//! the loosely-typed payload accepted by the create endpoint.

mod event;
mod request;

pub use event::{Event, STATUS_UPCOMING};
pub use request::CreateEventRequest;
