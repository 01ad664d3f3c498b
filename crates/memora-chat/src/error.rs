use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat provider error: {0}")]
    Provider(String),

    #[error("chat provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("transcription failed: {0}")]
    Transcription(String),

    #[error("narration failed: {0}")]
    Narration(String),
}
