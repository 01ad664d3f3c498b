use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Free-form caregiver note about the patient's cognition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CognitiveNote {
    pub id: Uuid,
    pub content: String,
    pub timestamp: jiff::Timestamp,
    #[serde(default)]
    pub tags: Vec<String>,
}
