//! API error responses
//!
//! Every error returned by the HTTP layer serialises as:
//! ```json
//! { "error": "<message>" }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::error::EventError;

/// Message returned for any storage failure
pub const STORAGE_ERROR_MESSAGE: &str = "failed to access event storage";

/// API error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error with the status code it is reported under
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: message.into(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.body.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<EventError> for ApiError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::Validation(e) => Self::bad_request(e.to_string()),
            EventError::Storage(e) => {
                error!("Event storage failure: {}", e);
                Self::internal(STORAGE_ERROR_MESSAGE)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, ValidationError};

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from(EventError::from(ValidationError::InvalidMaxAttendees));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "maxAttendees must be a positive integer");
    }

    #[test]
    fn test_storage_maps_to_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ApiError::from(EventError::from(StoreError::from(io)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), STORAGE_ERROR_MESSAGE);
    }
}
