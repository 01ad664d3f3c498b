use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskLevel;
use super::signal::EmotionKind;
use super::snapshot::MetricSnapshot;
use crate::error::SinkError;

/// Metrics attached to a caregiver alert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlertMetrics {
    pub temporal_orientation: f64,
    pub speech_coherence: f64,
    pub memory_consistency: f64,
    pub emotional_state: EmotionKind,
}

/// Notification raised when a snapshot's risk crosses the alert threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaregiverAlert {
    /// Serialized as `normal`, `attention` or `urgent`.
    #[serde(with = "super::risk::alerting_name")]
    #[ts(type = "\"normal\" | \"attention\" | \"urgent\"")]
    pub level: RiskLevel,
    pub message: String,
    pub metrics: AlertMetrics,
    pub raised_at: jiff::Timestamp,
}

impl CaregiverAlert {
    /// Build the alert for a snapshot.
    ///
    /// The message lists the snapshot's concerns, or names the risk level
    /// when no specific concern was flagged.
    pub fn from_snapshot(snapshot: &MetricSnapshot) -> Self {
        let message = if snapshot.concerns.is_empty() {
            format!("Cognitive alert: risk level {}", snapshot.risk_level)
        } else {
            format!("Cognitive alert: {}", snapshot.concerns.join(", "))
        };

        Self {
            level: snapshot.risk_level,
            message,
            metrics: AlertMetrics {
                temporal_orientation: snapshot.temporal_orientation,
                speech_coherence: snapshot.speech_patterns.coherence,
                memory_consistency: snapshot.memory_consistency,
                emotional_state: snapshot.emotional_state.primary,
            },
            raised_at: snapshot.captured_at,
        }
    }
}

/// Receiver of caregiver alerts.
///
/// Delivery is fire-and-forget from the analyzer's point of view: an `Err`
/// is logged by the caller and never fails the analysis. Implementations
/// must not block for long; slow transports should enqueue and return.
pub trait AlertSink: Send + Sync {
    fn notify(&self, alert: CaregiverAlert) -> Result<(), SinkError>;
}
