use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid risk level: {0}")]
    InvalidRiskLevel(String),

    #[error("invalid emotional state: {0}")]
    InvalidEmotion(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("schedule out of range: {0}")]
    Schedule(#[from] jiff::Error),
}

/// Failure reported by an [`AlertSink`](crate::models::alert::AlertSink).
///
/// Callers of the analysis pipeline never see this error: the conversation
/// analyzer logs and swallows it.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("alert sink unavailable: {0}")]
    Unavailable(String),
}
