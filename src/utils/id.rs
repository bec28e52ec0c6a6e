//! Event identifier generation
//!
//! Ids have the form `EVT-<milliseconds>`. The generator never hands out the
//! same number twice: when the clock has not advanced past the last issued
//! value (or moved backwards) the next value is `last + 1`.

use parking_lot::Mutex;

use super::time::current_timestamp_millis;

/// Prefix of every event id
pub const EVENT_ID_PREFIX: &str = "EVT-";

/// Process-wide monotonic id source
#[derive(Debug, Default)]
pub struct EventIdGenerator {
    last: Mutex<i64>,
}

impl EventIdGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next event id
    pub fn next_id(&self) -> String {
        self.next_id_at(current_timestamp_millis())
    }

    fn next_id_at(&self, now_ms: i64) -> String {
        let mut last = self.last.lock();
        let value = if now_ms > *last { now_ms } else { *last + 1 };
        *last = value;
        format!("{}{}", EVENT_ID_PREFIX, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let id = EventIdGenerator::new().next_id();
        let digits = id.strip_prefix(EVENT_ID_PREFIX).unwrap();
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let generator = EventIdGenerator::new();
        assert_eq!(generator.next_id_at(1_000), "EVT-1000");
        assert_eq!(generator.next_id_at(1_000), "EVT-1001");
        assert_eq!(generator.next_id_at(999), "EVT-1002");
        assert_eq!(generator.next_id_at(5_000), "EVT-5000");
    }

    #[test]
    fn test_rapid_ids_are_unique() {
        let generator = EventIdGenerator::new();
        let ids: std::collections::HashSet<String> =
            (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
