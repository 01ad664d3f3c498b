use memora_core::models::signal::SignalSet;

use crate::AggregationPolicy;
use crate::scoring::SpeechWeights;

/// Weighted speech-pattern composite. The default policy.
///
/// Risk is classified from the mean of the composite, temporal and spatial
/// orientation, and short- and long-term memory.
#[derive(Debug, Clone, Default)]
pub struct Weighted {
    pub weights: SpeechWeights,
}

impl Weighted {
    pub const ID: &'static str = "weighted";

    pub fn new(weights: SpeechWeights) -> Self {
        Self { weights }
    }
}

impl AggregationPolicy for Weighted {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Weighted speech patterns"
    }

    fn composite(&self, signals: &SignalSet) -> f64 {
        self.weights.apply(signals)
    }

    fn risk_inputs(&self, signals: &SignalSet, composite: f64) -> Vec<f64> {
        vec![
            composite,
            signals.temporal_orientation,
            signals.spatial_orientation,
            signals.short_term_memory,
            signals.long_term_memory,
        ]
    }
}
