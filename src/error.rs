//! Error types shared by the store, the service and the HTTP layer

use thiserror::Error;

/// Client payload rejected before any storage access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title, date, location, maxAttendees are required")]
    MissingFields,

    #[error("maxAttendees must be a positive integer")]
    InvalidMaxAttendees,
}

/// The events document could not be read, decoded or written
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of an event service operation
#[derive(Debug, Error)]
pub enum EventError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Result type for event operations
pub type EventResult<T> = Result<T, EventError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "title, date, location, maxAttendees are required"
        );
        assert_eq!(
            ValidationError::InvalidMaxAttendees.to_string(),
            "maxAttendees must be a positive integer"
        );
    }

    #[test]
    fn test_event_error_is_transparent_for_validation() {
        let err = EventError::from(ValidationError::MissingFields);
        assert_eq!(err.to_string(), ValidationError::MissingFields.to_string());
    }
}
