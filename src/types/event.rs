//! Event record type

use serde::{Deserialize, Serialize};

/// Status assigned to every newly created event
pub const STATUS_UPCOMING: &str = "upcoming";

/// A registrable event as stored in the events document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub location: String,
    #[serde(rename = "maxAttendees")]
    pub max_attendees: u64,
    #[serde(rename = "currentAttendees", default)]
    pub current_attendees: u64,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    STATUS_UPCOMING.to_string()
}

impl Event {
    /// Create a new upcoming event with no attendees
    pub fn new(
        event_id: String,
        title: String,
        description: String,
        date: String,
        location: String,
        max_attendees: u64,
    ) -> Self {
        Self {
            event_id,
            title,
            description,
            date,
            location,
            max_attendees,
            current_attendees: 0,
            status: default_status(),
        }
    }
}
