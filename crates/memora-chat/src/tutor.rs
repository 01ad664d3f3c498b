use std::sync::Arc;
use std::time::Duration;

use memora_analysis::conversation::SharedAnalyzer;
use memora_core::models::conversation::{ConversationMessage, Speaker};
use memora_core::models::snapshot::MetricSnapshot;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::chat::{recent_turns, ChatCompletionProvider, ChatMessage};
use crate::context::{contextualize, SYSTEM_PROMPT};
use crate::error::ChatError;
use crate::responder::CannedResponder;
use crate::voice::{Narrator, Transcriber, VoiceSettings};

/// Reply used when the provider fails or times out.
pub const FALLBACK_REPLY: &str = "Peço desculpa, ocorreu um erro. Poderia repetir por favor?";

/// Reply used when the provider returns only whitespace.
pub const EMPTY_REPLY: &str = "Desculpe, não consegui processar a sua mensagem.";

/// Prior transcript messages sent to the provider with each new input.
pub const CONTEXT_TURNS: usize = 2;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// What produces the tutor's replies.
pub enum Backend {
    Provider(Arc<dyn ChatCompletionProvider>),
    Offline(CannedResponder<StdRng>),
}

#[derive(Debug, Clone)]
pub struct TutorReply {
    pub text: String,
    /// The analysis of the patient's input, when it succeeded.
    pub analysis: Option<MetricSnapshot>,
    /// Whether `text` is a fixed fallback rather than a generated reply.
    pub fallback: bool,
}

/// One patient/tutor conversation.
///
/// Every patient message is analyzed first; the snapshot annotates the
/// system prompt. A failed analysis never blocks the reply.
pub struct TutorSession {
    backend: Backend,
    analyzer: SharedAnalyzer,
    transcript: Vec<ConversationMessage>,
    timeout: Duration,
    voice: VoiceSettings,
}

impl TutorSession {
    pub fn new(backend: Backend, analyzer: SharedAnalyzer) -> Self {
        Self {
            backend,
            analyzer,
            transcript: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            voice: VoiceSettings::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_voice(mut self, voice: VoiceSettings) -> Self {
        self.voice = voice;
        self
    }

    pub fn transcript(&self) -> &[ConversationMessage] {
        &self.transcript
    }

    pub fn analyzer(&self) -> &SharedAnalyzer {
        &self.analyzer
    }

    /// Analyze `text` and produce the tutor's reply. Always yields a reply.
    pub async fn respond(&mut self, text: &str) -> TutorReply {
        let analysis = match self.analyzer.analyze_interaction(text).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(error = %e, "analysis unavailable, replying without annotation");
                None
            }
        };

        let (reply, fallback) = match &mut self.backend {
            Backend::Provider(provider) => {
                let system_prompt = contextualize(SYSTEM_PROMPT, analysis.as_ref());
                let mut messages = recent_turns(&self.transcript, CONTEXT_TURNS);
                messages.push(ChatMessage::user(text));

                match complete_within(provider.as_ref(), &system_prompt, &messages, self.timeout).await
                {
                    Ok(reply) if !reply.trim().is_empty() => (reply.trim().to_string(), false),
                    Ok(_) => (EMPTY_REPLY.to_string(), true),
                    Err(e) => {
                        warn!(error = %e, "chat completion failed, using fallback reply");
                        (FALLBACK_REPLY.to_string(), true)
                    }
                }
            }
            Backend::Offline(responder) => {
                let canned = responder.reply(text, analysis.as_ref());
                info!(kind = ?canned.kind, "offline reply");
                (canned.text, false)
            }
        };

        let now = jiff::Timestamp::now();
        self.transcript.push(ConversationMessage {
            speaker: Speaker::Patient,
            text: text.to_string(),
            timestamp: now,
        });
        self.transcript.push(ConversationMessage {
            speaker: Speaker::Tutor,
            text: reply.clone(),
            timestamp: now,
        });

        TutorReply {
            text: reply,
            analysis,
            fallback,
        }
    }

    /// Transcribe `audio`, respond, and speak the reply.
    ///
    /// A transcription failure is returned. A narration failure is logged
    /// and the reply still returned, since it already sits in the transcript.
    pub async fn respond_to_audio(
        &mut self,
        audio: &[u8],
        transcriber: &dyn Transcriber,
        narrator: &dyn Narrator,
    ) -> Result<TutorReply, ChatError> {
        let text = transcriber.transcribe(audio).await?;
        let reply = self.respond(&text).await;
        if let Err(e) = narrator.narrate(&reply.text, &self.voice).await {
            warn!(error = %e, "narration failed");
        }
        Ok(reply)
    }
}

/// Call the provider, bounded by `timeout`.
pub async fn complete_within(
    provider: &dyn ChatCompletionProvider,
    system_prompt: &str,
    messages: &[ChatMessage],
    timeout: Duration,
) -> Result<String, ChatError> {
    tokio::time::timeout(timeout, provider.complete(system_prompt, messages))
        .await
        .map_err(|_| ChatError::Timeout(timeout))?
}
