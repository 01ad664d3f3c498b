use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentPlan {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub start_date: jiff::civil::Date,
    pub end_date: Option<jiff::civil::Date>,
    pub diagnosis: String,
    pub primary_physician: String,
    #[serde(default)]
    pub medications: Vec<PrescribedMedication>,
    #[serde(default)]
    pub therapies: Vec<Therapy>,
    #[serde(default)]
    pub monitoring: Vec<MonitoringParameter>,
    #[serde(default)]
    pub dietary_requirements: Vec<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub emergency_protocol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrescribedMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub route: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Therapy {
    pub kind: TherapyKind,
    pub frequency: String,
    pub duration: String,
    #[serde(default)]
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TherapyKind {
    Physical,
    Occupational,
    Speech,
    Cognitive,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonitoringParameter {
    pub parameter: String,
    pub frequency: String,
    pub threshold: String,
}
