use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
