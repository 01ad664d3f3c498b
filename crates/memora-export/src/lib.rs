//! memora-export
//!
//! Plain-text patient and daily health reports rendered from Tera
//! templates, and the conversion of canonical 0–1 scores to the "/10"
//! scale clinicians read.

pub mod error;
pub mod health;
pub mod labels;
pub mod render;
pub mod report;
pub mod scale;
pub mod summary;

pub use health::HealthSummary;
pub use report::{ReportData, ReportKind, render_report};
pub use summary::CognitiveSummary;
