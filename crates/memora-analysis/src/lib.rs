//! memora-analysis
//!
//! Heuristic cognitive text analysis. Raw text is normalized, scored by
//! independent signal analyzers, and combined by an aggregation policy into
//! a [`MetricSnapshot`](memora_core::models::snapshot::MetricSnapshot).
//! No network or storage dependency.

pub mod clock;
pub mod config;
pub mod conversation;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod policies;
pub mod scoring;
pub mod signals;

use memora_core::models::risk::RiskLevel;
use memora_core::models::signal::SignalSet;

use error::AnalysisError;
use scoring::Aggregate;

/// Id of the policy used when none is configured.
pub const DEFAULT_POLICY: &str = policies::weighted::Weighted::ID;

/// Strategy that turns a signal set into a cognitive score and risk level.
pub trait AggregationPolicy: Send + Sync {
    /// Unique identifier (e.g., "weighted", "simple").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The cognitive score for a signal set, in [0, 1].
    fn composite(&self, signals: &SignalSet) -> f64;

    /// The scores whose mean classifies risk.
    fn risk_inputs(&self, signals: &SignalSet, composite: f64) -> Vec<f64>;

    /// Composite, risk, concerns and recommendations for a signal set.
    ///
    /// Fails with [`AnalysisError::AnalysisFailure`] when the composite or
    /// the risk average is not a finite number.
    fn aggregate(&self, signals: &SignalSet) -> Result<Aggregate, AnalysisError> {
        let composite = self.composite(signals);
        if !composite.is_finite() {
            return Err(AnalysisError::AnalysisFailure(format!(
                "{}: composite score is {composite}",
                self.name()
            )));
        }
        let composite = composite.clamp(0.0, 1.0);

        let average = scoring::mean(&self.risk_inputs(signals, composite));
        if !average.is_finite() {
            return Err(AnalysisError::AnalysisFailure(format!(
                "{}: risk average is {average}",
                self.name()
            )));
        }

        Ok(Aggregate {
            composite_score: composite,
            average,
            risk_level: RiskLevel::from_average(average),
            concerns: scoring::concerns(signals),
            recommendations: scoring::recommendations(signals),
        })
    }
}

/// Return all registered policies with their default parameters.
pub fn all_policies() -> Vec<Box<dyn AggregationPolicy>> {
    vec![
        Box::new(policies::weighted::Weighted::default()),
        Box::new(policies::simple::Simple),
    ]
}

/// Look up a policy by ID.
pub fn get_policy(id: &str) -> Option<Box<dyn AggregationPolicy>> {
    all_policies().into_iter().find(|p| p.id() == id)
}
