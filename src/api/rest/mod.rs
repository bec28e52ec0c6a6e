//! REST API module for HTTP endpoints
//!
//! - `POST /api/events` - Create an event
//! - `GET /api/events` - List all events

pub mod events;
