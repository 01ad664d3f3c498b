use memora_core::error::SinkError;
use memora_core::models::alert::{AlertSink, CaregiverAlert};
use serde::Serialize;
use tracing::{info, warn};

/// A caregiver alert flattened for structured logging.
///
/// The level uses the alerting naming (`normal`, `attention`, `urgent`)
/// because this is what reaches the caregiver.
#[derive(Debug, Clone, Serialize)]
pub struct AlertEvent {
    pub level: String,
    pub message: String,
    pub temporal_orientation: f64,
    pub speech_coherence: f64,
    pub memory_consistency: f64,
    pub emotional_state: String,
    pub raised_at: jiff::Timestamp,
}

impl From<&CaregiverAlert> for AlertEvent {
    fn from(alert: &CaregiverAlert) -> Self {
        Self {
            level: alert.level.alert_name().to_string(),
            message: alert.message.clone(),
            temporal_orientation: alert.metrics.temporal_orientation,
            speech_coherence: alert.metrics.speech_coherence,
            memory_consistency: alert.metrics.memory_consistency,
            emotional_state: alert.metrics.emotional_state.to_string(),
            raised_at: alert.raised_at,
        }
    }
}

impl AlertEvent {
    /// Emit this alert via tracing. Urgent alerts are logged at `warn`.
    pub fn emit(&self) {
        if self.level == "urgent" {
            warn!(
                alert.level = %self.level,
                alert.temporal_orientation = self.temporal_orientation,
                alert.speech_coherence = self.speech_coherence,
                alert.memory_consistency = self.memory_consistency,
                alert.emotional_state = %self.emotional_state,
                alert.raised_at = %self.raised_at,
                "{}",
                self.message
            );
        } else {
            info!(
                alert.level = %self.level,
                alert.temporal_orientation = self.temporal_orientation,
                alert.speech_coherence = self.speech_coherence,
                alert.memory_consistency = self.memory_consistency,
                alert.emotional_state = %self.emotional_state,
                alert.raised_at = %self.raised_at,
                "{}",
                self.message
            );
        }
    }
}

/// Sink that writes every alert to the log. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AlertSink for TracingSink {
    fn notify(&self, alert: CaregiverAlert) -> Result<(), SinkError> {
        AlertEvent::from(&alert).emit();
        Ok(())
    }
}
