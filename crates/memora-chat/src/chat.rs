//! Chat-completion seam. Whatever model backs the tutor is reached through
//! [`ChatCompletionProvider`]; the rest of the crate never sees a transport.

use async_trait::async_trait;
use memora_core::models::conversation::{ConversationMessage, Speaker};
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

impl From<&ConversationMessage> for ChatMessage {
    fn from(message: &ConversationMessage) -> Self {
        let role = match message.speaker {
            Speaker::Patient => ChatRole::User,
            Speaker::Tutor => ChatRole::Assistant,
        };
        Self {
            role,
            content: message.text.clone(),
        }
    }
}

/// Produces a short tutor reply from a system prompt and the recent turns.
///
/// The last message in `messages` is the patient's new input.
#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError>;
}

/// The last `n` messages of a transcript as chat messages, oldest first.
pub fn recent_turns(transcript: &[ConversationMessage], n: usize) -> Vec<ChatMessage> {
    let start = transcript.len().saturating_sub(n);
    transcript[start..].iter().map(ChatMessage::from).collect()
}
