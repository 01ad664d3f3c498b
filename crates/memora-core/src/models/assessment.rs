use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A bedside neurological assessment recorded by a clinician.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NeurologicalAssessment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date: jiff::civil::Date,
    pub consciousness: Consciousness,
    pub motor_function: MotorFunction,
    pub cognitive_status: CognitiveStatus,
    pub vital_signs: VitalSigns,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub complications: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Consciousness {
    pub level: ConsciousnessLevel,
    /// Glasgow Coma Scale, 3–15.
    pub glasgow_score: u8,
    pub pupil_response: PupilResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConsciousnessLevel {
    Alert,
    Drowsy,
    Stuporous,
    Comatose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PupilResponse {
    Normal,
    Abnormal,
    Fixed,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MotorFunction {
    /// Strength on the 0–5 scale.
    pub strength: u8,
    pub coordination: Coordination,
    pub gait: Gait,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Coordination {
    Normal,
    Impaired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gait {
    Normal,
    Ataxic,
    Spastic,
    Unable,
}

/// Clinician-rated cognitive status, each item on the 0–10 scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CognitiveStatus {
    pub orientation: u8,
    pub memory: u8,
    pub attention: u8,
    pub language: u8,
    pub executive_function: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalSigns {
    pub blood_pressure: String,
    pub heart_rate: u16,
    pub temperature: f64,
    pub respiratory_rate: u16,
    pub oxygen_saturation: u8,
}
