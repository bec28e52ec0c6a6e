//! Time and timestamp utilities

/// Get current Unix timestamp in milliseconds
pub fn current_timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
