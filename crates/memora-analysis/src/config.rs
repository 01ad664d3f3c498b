use memora_core::models::risk::RiskLevel;
use serde::{Deserialize, Serialize};

use crate::AggregationPolicy;
use crate::error::AnalysisError;
use crate::lexicon::Lexicon;
use crate::policies::simple::Simple;
use crate::policies::weighted::Weighted;
use crate::scoring::SpeechWeights;

/// Everything a [`ConversationAnalyzer`](crate::conversation::ConversationAnalyzer)
/// is parameterized by. Every field has a default, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Aggregation policy id.
    pub policy: String,
    /// Speech weights for the `weighted` policy.
    pub weights: SpeechWeights,
    /// Longest accepted input, in characters.
    pub max_input_chars: usize,
    /// Prior samples compared for repetition and short-term memory.
    pub history_window: usize,
    /// Prior cognitive scores needed before long-term memory is measured.
    pub consistency_window: usize,
    /// Prior samples searched for contradicting statements.
    pub contradiction_window: usize,
    /// Lowest risk level that notifies the alert sink.
    pub alert_threshold: RiskLevel,
    #[serde(skip_serializing_if = "Lexicon::is_default")]
    pub lexicon: Lexicon,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            policy: crate::DEFAULT_POLICY.to_string(),
            weights: SpeechWeights::default(),
            max_input_chars: 10_000,
            history_window: 3,
            consistency_window: 5,
            contradiction_window: 10,
            alert_threshold: RiskLevel::Moderate,
            lexicon: Lexicon::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.max_input_chars == 0 {
            return Err(AnalysisError::InvalidConfig(
                "max_input_chars must be positive".to_string(),
            ));
        }
        if !self.weights.is_valid() {
            return Err(AnalysisError::InvalidConfig(format!(
                "speech weights must be non-negative with a positive sum, got {:?}",
                self.weights
            )));
        }
        if crate::get_policy(&self.policy).is_none() {
            return Err(AnalysisError::UnknownPolicy(self.policy.clone()));
        }
        Ok(())
    }

    /// Instantiate the configured policy with the configured weights.
    pub fn build_policy(&self) -> Result<Box<dyn AggregationPolicy>, AnalysisError> {
        match self.policy.as_str() {
            Weighted::ID => Ok(Box::new(Weighted::new(self.weights))),
            Simple::ID => Ok(Box::new(Simple)),
            other => Err(AnalysisError::UnknownPolicy(other.to_string())),
        }
    }
}
