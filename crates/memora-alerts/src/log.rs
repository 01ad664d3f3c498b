use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jiff::{SignedDuration, Timestamp};
use memora_core::error::SinkError;
use memora_core::models::alert::{AlertSink, CaregiverAlert};

use crate::error::AlertError;

/// Longest window `recent` accepts, about a century.
const MAX_WINDOW_HOURS: i64 = 24 * 366 * 100;

/// In-memory record of every alert raised, optionally forwarding each one
/// to another sink.
#[derive(Default)]
pub struct AlertLog {
    alerts: Mutex<Vec<CaregiverAlert>>,
    inner: Option<Arc<dyn AlertSink>>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record alerts and pass them on to `inner`.
    pub fn forwarding_to(inner: Arc<dyn AlertSink>) -> Self {
        Self {
            alerts: Mutex::default(),
            inner: Some(inner),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Every alert recorded, oldest first.
    pub fn all(&self) -> Vec<CaregiverAlert> {
        self.lock().clone()
    }

    /// Alerts raised in the last `hours` hours.
    pub fn recent(&self, hours: i64) -> Vec<CaregiverAlert> {
        self.recent_at(Timestamp::now(), hours)
    }

    /// Alerts raised in the `hours` hours up to `now`, inclusive of both ends.
    pub fn recent_at(&self, now: Timestamp, hours: i64) -> Vec<CaregiverAlert> {
        let window = SignedDuration::from_hours(hours.clamp(0, MAX_WINDOW_HOURS));
        let cutoff = now.checked_sub(window).unwrap_or(Timestamp::MIN);
        self.lock()
            .iter()
            .filter(|a| a.raised_at >= cutoff && a.raised_at <= now)
            .cloned()
            .collect()
    }

    pub fn to_json(&self) -> Result<String, AlertError> {
        Ok(serde_json::to_string_pretty(&*self.lock())?)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CaregiverAlert>> {
        self.alerts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AlertSink for AlertLog {
    /// Records the alert, then forwards it. The alert stays recorded even
    /// when forwarding fails.
    fn notify(&self, alert: CaregiverAlert) -> Result<(), SinkError> {
        self.lock().push(alert.clone());
        match &self.inner {
            Some(inner) => inner.notify(alert),
            None => Ok(()),
        }
    }
}
