//! Create-event payload

use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /api/events`
///
/// Fields are kept as raw JSON values so that validation decides between
/// "missing" and "wrong type" before any type is enforced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEventRequest {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub date: Option<Value>,
    pub location: Option<Value>,
    #[serde(rename = "maxAttendees")]
    pub max_attendees: Option<Value>,
}
