//! Speech collaborators. Recognition and synthesis are provided by the
//! host platform; the tutor only sees these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Speech synthesis parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    /// BCP 47 language tag.
    pub language: String,
    pub pitch: f64,
    /// Slightly below 1 for clarity.
    pub rate: f64,
    pub volume: f64,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            language: "pt-PT".to_string(),
            pitch: 1.0,
            rate: 0.95,
            volume: 1.0,
        }
    }
}

/// Audio to text.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, ChatError>;
}

/// Text to audio playback.
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn narrate(&self, text: &str, settings: &VoiceSettings) -> Result<(), ChatError>;
}
