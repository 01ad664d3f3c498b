//! Storage key conventions.
//!
//! Pure string functions. These define the canonical layout of JSON blobs in
//! whatever key/value store the application persists to.

use uuid::Uuid;

pub fn session_snapshots(session: Uuid) -> String {
    format!("sessions/{session}/snapshots")
}

pub fn session_messages(session: Uuid) -> String {
    format!("sessions/{session}/messages")
}

/// Samples the analyzer accepted. Rejected turns appear in the messages but
/// never here.
pub fn session_samples(session: Uuid) -> String {
    format!("sessions/{session}/samples")
}

pub fn session_alerts(session: Uuid) -> String {
    format!("sessions/{session}/alerts")
}

pub const ASSESSMENTS: &str = "records/assessments";

pub const TREATMENT_PLANS: &str = "records/treatment-plans";

pub const MEDICATIONS: &str = "records/medications";

pub const ACTIVITIES: &str = "records/activities";

pub const APPOINTMENTS: &str = "records/appointments";

pub const LAB_RESULTS: &str = "records/lab-results";

pub const COGNITIVE_NOTES: &str = "records/cognitive-notes";

pub const PATIENT_NAME: &str = "patient/name";
