use memora_core::models::signal::SignalSet;

use crate::AggregationPolicy;
use crate::scoring::mean;

/// Plain mean of temporal orientation, coherence and memory consistency.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple;

impl Simple {
    pub const ID: &'static str = "simple";

    fn inputs(signals: &SignalSet) -> [f64; 3] {
        [
            signals.temporal_orientation,
            signals.coherence,
            signals.memory_consistency,
        ]
    }
}

impl AggregationPolicy for Simple {
    fn id(&self) -> &str {
        Self::ID
    }

    fn name(&self) -> &str {
        "Simple mean"
    }

    fn composite(&self, signals: &SignalSet) -> f64 {
        mean(&Self::inputs(signals))
    }

    fn risk_inputs(&self, signals: &SignalSet, _composite: f64) -> Vec<f64> {
        Self::inputs(signals).to_vec()
    }
}
