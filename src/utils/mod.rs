//! Utility functions and helpers
//!
//! This module contains atomic file writes, timestamps and event id
//! generation.

pub mod atomic;
pub mod id;
pub mod time;

pub use atomic::{atomic_write, cleanup_temp_file, temp_path};
pub use id::EventIdGenerator;
pub use time::current_timestamp_millis;
