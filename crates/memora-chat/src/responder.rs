//! Offline tutor replies, used when no chat-completion provider is
//! configured.
//!
//! Priority: supportive reply on high risk, then (while fewer than
//! [`MAX_EXERCISES`] have been given, with probability
//! [`EXERCISE_PROBABILITY`]) a memory exercise, then emotional support on a
//! negative emotional state, then a greeting, then a generic reply.

use memora_analysis::normalize::normalize;
use memora_core::models::risk::RiskLevel;
use memora_core::models::signal::EmotionKind;
use memora_core::models::snapshot::MetricSnapshot;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::exercises::{self, Exercise};

pub const MAX_EXERCISES: usize = 3;

pub const EXERCISE_PROBABILITY: f64 = 0.5;

const SUPPORTIVE: &[&str] = &[
    "Percebo que pode estar um pouco confuso. Está tudo bem. Vamos com calma.",
    "Não se preocupe se as coisas parecerem confusas. Podemos conversar sobre o que preferir.",
    "Está a correr muito bem. Gostaria de falar sobre algo que lhe seja familiar?",
];

const EMOTIONAL_SUPPORT: &[&str] = &[
    "Entendo que se sente frustrado. Isso é natural. Vamos focar-nos em algo positivo.",
    "É normal ter momentos difíceis. Quer falar sobre algo que o deixa feliz?",
    "Os seus sentimentos são válidos. Vamos fazer uma pausa e pensar em algo agradável.",
];

const CONVERSATIONAL: &[&str] = &[
    "Que interessante! Gostaria de me contar mais sobre isso?",
    "Gosto das nossas conversas. O que mais gostaria de partilhar?",
    "Obrigada por partilhar isso comigo. Como se sente em relação a isso?",
];

const GREETING_REPLY: &str = "Olá! Sou a sua companheira. Como se sente hoje?";

const GREETINGS: &[&str] = &["olá", "oi", "bom dia", "boa tarde", "boa noite", "hello", "hi"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Supportive,
    Exercise,
    EmotionalSupport,
    Greeting,
    Conversational,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedReply {
    pub kind: ReplyKind,
    pub text: String,
    /// Set when `kind` is [`ReplyKind::Exercise`].
    pub exercise: Option<Exercise>,
}

/// Rule-based responder. All random choices go through the injected `R`.
#[derive(Debug, Clone)]
pub struct CannedResponder<R> {
    rng: R,
    exercises_given: Vec<Exercise>,
}

impl<R: Rng> CannedResponder<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            exercises_given: Vec::new(),
        }
    }

    pub fn exercises_given(&self) -> &[Exercise] {
        &self.exercises_given
    }

    /// Reply to `input`, using the snapshot of the same turn when available.
    pub fn reply(&mut self, input: &str, analysis: Option<&MetricSnapshot>) -> CannedReply {
        if analysis.is_some_and(|s| s.risk_level == RiskLevel::High) {
            return self.choose(ReplyKind::Supportive, SUPPORTIVE);
        }

        if self.exercises_given.len() < MAX_EXERCISES && self.rng.gen_bool(EXERCISE_PROBABILITY) {
            let exercise = exercises::pick(&mut self.rng, None);
            self.exercises_given.push(exercise.clone());
            return CannedReply {
                kind: ReplyKind::Exercise,
                text: format!(
                    "Vamos fazer um exercício juntos. {} Não tenha pressa, tome o seu tempo.",
                    exercise.question
                ),
                exercise: Some(exercise),
            };
        }

        if analysis.is_some_and(|s| s.emotional_state.primary == EmotionKind::Negative) {
            return self.choose(ReplyKind::EmotionalSupport, EMOTIONAL_SUPPORT);
        }

        if is_greeting(input) {
            return CannedReply {
                kind: ReplyKind::Greeting,
                text: GREETING_REPLY.to_string(),
                exercise: None,
            };
        }

        self.choose(ReplyKind::Conversational, CONVERSATIONAL)
    }

    fn choose(&mut self, kind: ReplyKind, options: &[&str]) -> CannedReply {
        let text = options[self.rng.gen_range(0..options.len())];
        CannedReply {
            kind,
            text: text.to_string(),
            exercise: None,
        }
    }
}

fn is_greeting(input: &str) -> bool {
    let text = normalize(input);
    GREETINGS.iter().any(|g| text.contains_phrase(g))
}
