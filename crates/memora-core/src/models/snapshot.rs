use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskLevel;
use super::signal::{BehavioralPattern, EmotionalState, SignalKind, SignalSet};

/// Speech-pattern sub-scores of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpeechPatterns {
    pub coherence: f64,
    pub fluency: f64,
    pub vocabulary: f64,
    /// Repetition-freedom: 1 means nothing was repeated from recent turns.
    pub repetition: f64,
}

/// Language sub-scores of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LanguageMetrics {
    pub complexity: f64,
    pub grammar_accuracy: f64,
}

/// The complete result of one analysis pass. Produced once, never revised.
///
/// Scores are on the canonical 0–1 scale. Conversion to the "/10" scale
/// shown to clinicians happens at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricSnapshot {
    pub captured_at: jiff::Timestamp,
    /// Id of the aggregation policy that produced `cognitive_score` and `risk_level`.
    pub policy: String,
    pub cognitive_score: f64,
    pub temporal_orientation: f64,
    pub spatial_orientation: f64,
    pub short_term_memory: f64,
    pub long_term_memory: f64,
    pub memory_consistency: f64,
    pub emotional_state: EmotionalState,
    pub speech_patterns: SpeechPatterns,
    pub language: LanguageMetrics,
    pub behavior: BehavioralPattern,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
    /// Signals that could not be computed and fell back to a neutral default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded_signals: Vec<SignalKind>,
}

impl MetricSnapshot {
    /// Rebuild the signal set this snapshot was aggregated from.
    pub fn signals(&self) -> SignalSet {
        SignalSet {
            temporal_orientation: self.temporal_orientation,
            spatial_orientation: self.spatial_orientation,
            coherence: self.speech_patterns.coherence,
            fluency: self.speech_patterns.fluency,
            vocabulary: self.speech_patterns.vocabulary,
            complexity: self.language.complexity,
            grammar_accuracy: self.language.grammar_accuracy,
            repetition_freedom: self.speech_patterns.repetition,
            short_term_memory: self.short_term_memory,
            long_term_memory: self.long_term_memory,
            memory_consistency: self.memory_consistency,
            emotional_state: self.emotional_state,
            behavior: self.behavior,
        }
    }
}
