//! memora-core
//!
//! Pure domain types and storage key conventions. No I/O: this is the
//! shared vocabulary of the Memora system (samples, signals, snapshots,
//! risk levels, caregiver alerts and clinical records).

pub mod error;
pub mod models;
pub mod storage_keys;
