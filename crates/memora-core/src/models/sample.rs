use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::snapshot::MetricSnapshot;

/// A single turn of patient input. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TextSample {
    pub text: String,
    pub captured_at: jiff::Timestamp,
}

impl TextSample {
    pub fn new(text: impl Into<String>, captured_at: jiff::Timestamp) -> Self {
        Self {
            text: text.into(),
            captured_at,
        }
    }
}

/// Append-only record of a conversation: every sample received and every
/// snapshot produced, in call order.
///
/// A history is owned by exactly one conversation analyzer. The fields are
/// private so the only way to change a history is to append to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct History {
    samples: Vec<TextSample>,
    snapshots: Vec<MetricSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[TextSample] {
        &self.samples
    }

    pub fn snapshots(&self) -> &[MetricSnapshot] {
        &self.snapshots
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn record_sample(&mut self, sample: TextSample) {
        self.samples.push(sample);
    }

    pub fn record_snapshot(&mut self, snapshot: MetricSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// The last `n` samples, oldest first.
    pub fn recent_samples(&self, n: usize) -> &[TextSample] {
        let start = self.samples.len().saturating_sub(n);
        &self.samples[start..]
    }

    /// The last `n` samples before the most recent one, oldest first.
    pub fn prior_samples(&self, n: usize) -> &[TextSample] {
        let end = self.samples.len().saturating_sub(1);
        let start = end.saturating_sub(n);
        &self.samples[start..end]
    }

    /// Cognitive scores of the last `n` snapshots, oldest first.
    pub fn recent_scores(&self, n: usize) -> Vec<f64> {
        let start = self.snapshots.len().saturating_sub(n);
        self.snapshots[start..]
            .iter()
            .map(|s| s.cognitive_score)
            .collect()
    }
}
