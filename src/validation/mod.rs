//! Payload validation for event creation
//!
//! Checks run in a fixed order and the first failure wins: the four
//! required fields are tested together, then the attendee limit.

mod payload;

pub use payload::{is_truthy, validate_create, NewEvent};
