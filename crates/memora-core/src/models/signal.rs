use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Dominant emotional category detected in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EmotionKind {
    Positive,
    Negative,
    #[default]
    Neutral,
    Confused,
    Fatigued,
}

impl EmotionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionKind::Positive => "positive",
            EmotionKind::Negative => "negative",
            EmotionKind::Neutral => "neutral",
            EmotionKind::Confused => "confused",
            EmotionKind::Fatigued => "fatigued",
        }
    }
}

impl fmt::Display for EmotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(EmotionKind::Positive),
            "negative" => Ok(EmotionKind::Negative),
            "neutral" => Ok(EmotionKind::Neutral),
            "confused" => Ok(EmotionKind::Confused),
            "fatigued" => Ok(EmotionKind::Fatigued),
            other => Err(CoreError::InvalidEmotion(other.to_string())),
        }
    }
}

/// Categorical emotional signal with a confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmotionalState {
    pub primary: EmotionKind,
    pub confidence: f64,
}

/// Four independent behavioral scores, each in [0, 1]. Higher means the
/// behavior is more pronounced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BehavioralPattern {
    pub repetitive_actions: f64,
    pub agitation: f64,
    pub confusion: f64,
    pub social_withdrawal: f64,
}

/// Every signal computed in one analysis pass. This is the input to an
/// aggregation policy.
///
/// All `f64` fields are bounded scores in [0, 1] where 1 is the healthy end
/// of the scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SignalSet {
    pub temporal_orientation: f64,
    pub spatial_orientation: f64,
    pub coherence: f64,
    pub fluency: f64,
    pub vocabulary: f64,
    pub complexity: f64,
    pub grammar_accuracy: f64,
    pub repetition_freedom: f64,
    pub short_term_memory: f64,
    pub long_term_memory: f64,
    pub memory_consistency: f64,
    pub emotional_state: EmotionalState,
    pub behavior: BehavioralPattern,
}

impl SignalSet {
    /// A signal set where every bounded score has the same value and no
    /// emotion or behavior was detected.
    pub fn uniform(score: f64) -> Self {
        Self {
            temporal_orientation: score,
            spatial_orientation: score,
            coherence: score,
            fluency: score,
            vocabulary: score,
            complexity: score,
            grammar_accuracy: score,
            repetition_freedom: score,
            short_term_memory: score,
            long_term_memory: score,
            memory_consistency: score,
            emotional_state: EmotionalState::default(),
            behavior: BehavioralPattern::default(),
        }
    }
}

/// Identifies one signal, used to report which signals fell back to their
/// neutral default during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SignalKind {
    TemporalOrientation,
    SpatialOrientation,
    Coherence,
    Fluency,
    Vocabulary,
    Complexity,
    GrammarAccuracy,
    RepetitionFreedom,
    ShortTermMemory,
    LongTermMemory,
    MemoryConsistency,
    EmotionalState,
    Behavior,
}
