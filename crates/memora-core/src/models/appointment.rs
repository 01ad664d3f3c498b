use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    pub id: Uuid,
    pub kind: String,
    pub doctor: String,
    pub room: String,
    pub date: jiff::civil::Date,
    /// Local time of day, `HH:MM`.
    pub time: String,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabResult {
    pub id: Uuid,
    pub kind: String,
    pub doctor: String,
    pub date: jiff::civil::Date,
    pub result: Option<String>,
    pub attachment_url: Option<String>,
}
