use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One message of the patient/tutor conversation as shown in the chat and
/// in exported reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversationMessage {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Speaker {
    Patient,
    Tutor,
}
