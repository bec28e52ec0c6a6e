//! Event Store Module
//!
//! Persistence for the event collection. The whole collection lives in a
//! single pretty-printed JSON array, `<data_dir>/events.json`:
//! - `ensure_storage`: creates the directory and an empty document on first run
//! - `EventStore`: whole-document load and save, plus a serialized append
//!
//! # Write Path
//!
//! ```text
//! ┌─────────┐    ┌─────────────┐    ┌──────────────┐    ┌───────────────────┐
//! │ create  │───►│ writer lock │───►│ load + push  │───►│ events.tmp, rename│
//! │ request │    │ (one writer)│    │ in memory    │    │ over events.json  │
//! └─────────┘    └─────────────┘    └──────────────┘    └───────────────────┘
//! ```

mod document;
mod init;

pub use document::{EventStore, StoreConfig, StoreResult, EVENTS_FILE_NAME};
pub use init::ensure_storage;
