use std::sync::Arc;

use memora_core::error::SinkError;
use memora_core::models::alert::{AlertSink, CaregiverAlert};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Enqueue-and-return sink.
///
/// `notify` only pushes onto an unbounded channel; a background task drains
/// it into the inner sink. Fails with [`SinkError::Unavailable`] once the
/// receiving side is gone.
#[derive(Clone)]
pub struct QueuedSink {
    tx: UnboundedSender<CaregiverAlert>,
}

impl QueuedSink {
    /// Start a drain task delivering to `inner`. Must be called from inside
    /// a tokio runtime.
    ///
    /// The task ends once every clone of the returned sink has been dropped
    /// and the queue is empty; await the handle to flush.
    pub fn spawn(inner: Arc<dyn AlertSink>) -> (Self, JoinHandle<()>) {
        let (sink, mut rx) = Self::channel();
        let handle = tokio::spawn(async move {
            let mut delivered = 0usize;
            while let Some(alert) = rx.recv().await {
                match inner.notify(alert) {
                    Ok(()) => delivered += 1,
                    Err(e) => warn!(error = %e, "queued alert delivery failed"),
                }
            }
            info!(delivered, "alert queue drained");
        });
        (sink, handle)
    }

    /// A sink and the receiving end of its queue, for callers that drain
    /// alerts themselves.
    pub fn channel() -> (Self, UnboundedReceiver<CaregiverAlert>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl AlertSink for QueuedSink {
    fn notify(&self, alert: CaregiverAlert) -> Result<(), SinkError> {
        self.tx
            .send(alert)
            .map_err(|_| SinkError::Unavailable("alert queue is closed".to_string()))
    }
}
