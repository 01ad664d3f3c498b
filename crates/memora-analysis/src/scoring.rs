use memora_core::models::risk::RiskLevel;
use memora_core::models::signal::SignalSet;
use serde::{Deserialize, Serialize};

/// A signal below this is reported as a concern.
pub const CONCERN_THRESHOLD: f64 = 0.5;

/// A signal below this earns a recommendation.
pub const RECOMMENDATION_THRESHOLD: f64 = 0.6;

/// A behavioral score above this is flagged.
pub const BEHAVIOR_THRESHOLD: f64 = 0.5;

/// Output of an aggregation policy for one signal set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub composite_score: f64,
    /// Mean of the policy's risk inputs; the value risk is classified from.
    pub average: f64,
    pub risk_level: RiskLevel,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Relative weights of the speech-pattern signals in the weighted composite.
///
/// Weights need not sum to 1; the composite divides by their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechWeights {
    pub coherence: f64,
    pub fluency: f64,
    pub vocabulary: f64,
    pub repetition: f64,
}

impl Default for SpeechWeights {
    fn default() -> Self {
        Self {
            coherence: 0.3,
            fluency: 0.2,
            vocabulary: 0.2,
            repetition: 0.3,
        }
    }
}

impl SpeechWeights {
    pub fn total(&self) -> f64 {
        self.coherence + self.fluency + self.vocabulary + self.repetition
    }

    /// Weights are usable when each is finite and non-negative and their sum
    /// is positive.
    pub fn is_valid(&self) -> bool {
        let all = [self.coherence, self.fluency, self.vocabulary, self.repetition];
        all.iter().all(|w| w.is_finite() && *w >= 0.0) && self.total() > 0.0
    }

    pub fn apply(&self, signals: &SignalSet) -> f64 {
        let weighted = signals.coherence * self.coherence
            + signals.fluency * self.fluency
            + signals.vocabulary * self.vocabulary
            + signals.repetition_freedom * self.repetition;
        weighted / self.total()
    }
}

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Concern strings for a signal set, in fixed order.
pub fn concerns(signals: &SignalSet) -> Vec<String> {
    let mut concerns = Vec::new();

    if signals.temporal_orientation < CONCERN_THRESHOLD {
        concerns.push("Time disorientation detected");
    }
    if signals.coherence < CONCERN_THRESHOLD {
        concerns.push("Speech coherence issues detected");
    }
    if signals.memory_consistency < CONCERN_THRESHOLD {
        concerns.push("Memory inconsistencies detected");
    }

    let behavior = &signals.behavior;
    if behavior.confusion > BEHAVIOR_THRESHOLD {
        concerns.push("Signs of confusion detected");
    }
    if behavior.agitation > BEHAVIOR_THRESHOLD {
        concerns.push("Signs of agitation detected");
    }
    if behavior.repetitive_actions > BEHAVIOR_THRESHOLD {
        concerns.push("Repetitive behavior detected");
    }
    if behavior.social_withdrawal > BEHAVIOR_THRESHOLD {
        concerns.push("Social withdrawal detected");
    }

    concerns.into_iter().map(String::from).collect()
}

/// Recommendations for a signal set, without duplicates, in first-seen order.
pub fn recommendations(signals: &SignalSet) -> Vec<String> {
    let checks = [
        (signals.temporal_orientation, "Reforçar exercícios de orientação temporal"),
        (signals.spatial_orientation, "Praticar reconhecimento espacial"),
        (signals.coherence, "Exercícios de construção de narrativas"),
        (signals.fluency, "Exercícios de construção de narrativas"),
        (signals.vocabulary, "Atividades de expansão de vocabulário"),
        (signals.grammar_accuracy, "Praticar estruturas gramaticais básicas"),
        (signals.short_term_memory, "Atividades de memória recente"),
        (signals.long_term_memory, "Rever fotografias e acontecimentos da história pessoal"),
    ];

    let mut recommendations: Vec<&str> = checks
        .iter()
        .filter(|(score, _)| *score < RECOMMENDATION_THRESHOLD)
        .map(|(_, text)| *text)
        .collect();

    let behavior = &signals.behavior;
    let behavioral = [
        (behavior.confusion, "Implementar rotinas diárias estruturadas"),
        (behavior.agitation, "Praticar exercícios de relaxamento"),
        (behavior.repetitive_actions, "Diversificar atividades diárias"),
        (behavior.social_withdrawal, "Aumentar interação social supervisionada"),
    ];
    recommendations.extend(
        behavioral
            .iter()
            .filter(|(score, _)| *score > BEHAVIOR_THRESHOLD)
            .map(|(_, text)| *text),
    );

    let mut unique: Vec<String> = Vec::with_capacity(recommendations.len());
    for text in recommendations {
        if !unique.iter().any(|seen| seen == text) {
            unique.push(text.to_string());
        }
    }
    unique
}
