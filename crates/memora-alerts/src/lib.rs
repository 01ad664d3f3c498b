//! memora-alerts
//!
//! Caregiver alert sinks: a structured-log sink, an in-memory alert log with
//! recent-window queries, and a queued sink that delivers on a background
//! task so the analyzer never waits on a transport.

pub mod error;
pub mod events;
pub mod log;
pub mod queue;

pub use events::TracingSink;
pub use log::AlertLog;
pub use queue::QueuedSink;
