//! Command handlers behind the `memora` binary.
//!
//! Each handler takes its input, output and store explicitly so it runs the
//! same from `main` and from tests.

use std::io::{BufRead, Write};
use std::sync::Arc;

use eyre::Result;
use jiff::Zoned;
use memora_alerts::{AlertLog, TracingSink};
use memora_analysis::config::AnalyzerConfig;
use memora_analysis::conversation::{ConversationAnalyzer, SharedAnalyzer};
use memora_analysis::error::AnalysisError;
use memora_chat::responder::CannedResponder;
use memora_chat::tutor::{Backend, TutorSession};
use memora_core::models::alert::CaregiverAlert;
use memora_core::models::conversation::{ConversationMessage, Speaker};
use memora_core::models::health::{self, DailyActivity, Medication};
use memora_core::models::sample::{History, TextSample};
use memora_core::models::snapshot::MetricSnapshot;
use memora_core::storage_keys;
use memora_export::{ReportData, ReportKind, render_report};
use memora_storage::KeyValueStore;
use memora_storage::state::{load_state, load_state_or_default, save_state};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use uuid::Uuid;

/// Counts from one `analyze` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOutcome {
    pub analyzed: usize,
    pub rejected: usize,
    pub failed: usize,
    pub alerts: usize,
}

/// What a session has on file so far.
struct SessionRecord {
    messages: Vec<ConversationMessage>,
    samples: Vec<TextSample>,
    snapshots: Vec<MetricSnapshot>,
    alerts: Vec<CaregiverAlert>,
}

impl SessionRecord {
    async fn load(store: &dyn KeyValueStore, session: Uuid) -> Result<Self> {
        Ok(Self {
            messages: load_state_or_default(store, &storage_keys::session_messages(session))
                .await?,
            samples: load_state_or_default(store, &storage_keys::session_samples(session))
                .await?,
            snapshots: load_state_or_default(store, &storage_keys::session_snapshots(session))
                .await?,
            alerts: load_state_or_default(store, &storage_keys::session_alerts(session)).await?,
        })
    }

    async fn save(&self, store: &dyn KeyValueStore, session: Uuid) -> Result<()> {
        save_state(store, &storage_keys::session_messages(session), &self.messages).await?;
        save_state(store, &storage_keys::session_samples(session), &self.samples).await?;
        save_state(store, &storage_keys::session_snapshots(session), &self.snapshots).await?;
        save_state(store, &storage_keys::session_alerts(session), &self.alerts).await?;
        Ok(())
    }

    /// Rebuild the analyzer history so memory and repetition signals see
    /// earlier runs of the same session.
    fn history(&self) -> History {
        let mut history = History::new();
        for sample in &self.samples {
            history.record_sample(sample.clone());
        }
        for snapshot in &self.snapshots {
            history.record_snapshot(snapshot.clone());
        }
        history
    }
}

fn build_analyzer(
    config: &AnalyzerConfig,
    record: &SessionRecord,
) -> Result<(ConversationAnalyzer, Arc<AlertLog>)> {
    let alerts = Arc::new(AlertLog::forwarding_to(Arc::new(TracingSink)));
    let analyzer = ConversationAnalyzer::new(config.clone())?
        .with_history(record.history())
        .with_sink(alerts.clone());
    Ok((analyzer, alerts))
}

/// Analyze each non-blank line of `input` as one patient turn of `session`.
///
/// Writes one JSON snapshot per analyzed line to `out`. Rejected lines are
/// logged and skipped. Messages, snapshots and raised alerts are appended
/// to the session in `store`.
pub async fn analyze<R: BufRead, W: Write>(
    config: &AnalyzerConfig,
    store: &dyn KeyValueStore,
    session: Uuid,
    input: R,
    out: &mut W,
) -> Result<AnalyzeOutcome> {
    let mut record = SessionRecord::load(store, session).await?;
    let (mut analyzer, alerts) = build_analyzer(config, &record)?;
    let mut outcome = AnalyzeOutcome {
        analyzed: 0,
        rejected: 0,
        failed: 0,
        alerts: 0,
    };

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match analyzer.analyze_interaction(&line) {
            Ok(snapshot) => {
                serde_json::to_writer(&mut *out, &snapshot)?;
                writeln!(out)?;
                record.messages.push(patient_message(&line, snapshot.captured_at));
                record.snapshots.push(snapshot);
                outcome.analyzed += 1;
            }
            Err(e @ AnalysisError::InvalidInput(_)) => {
                warn!(line = index + 1, error = %e, "line rejected");
                outcome.rejected += 1;
            }
            Err(e @ AnalysisError::AnalysisFailure(_)) => {
                warn!(line = index + 1, error = %e, "analysis failed");
                record.messages.push(patient_message(&line, jiff::Timestamp::now()));
                outcome.failed += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
    out.flush()?;

    record.samples = analyzer.history().samples().to_vec();
    let raised = alerts.all();
    outcome.alerts = raised.len();
    record.alerts.extend(raised);
    record.save(store, session).await?;

    info!(
        session = %session,
        analyzed = outcome.analyzed,
        rejected = outcome.rejected,
        failed = outcome.failed,
        alerts = outcome.alerts,
        "analysis complete"
    );
    Ok(outcome)
}

/// Run an offline tutor conversation over the lines of `input`.
///
/// Each non-blank line is a patient message; each reply is written to
/// `out` on its own line. The transcript and snapshots are appended to the
/// session in `store`. Returns the number of replies.
pub async fn chat_offline<R: BufRead, W: Write>(
    config: &AnalyzerConfig,
    store: &dyn KeyValueStore,
    session: Uuid,
    seed: u64,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let mut record = SessionRecord::load(store, session).await?;
    let (analyzer, alerts) = build_analyzer(config, &record)?;
    let responder = CannedResponder::new(StdRng::seed_from_u64(seed));
    let mut tutor = TutorSession::new(Backend::Offline(responder), SharedAnalyzer::new(analyzer));

    let mut replies = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = tutor.respond(&line).await;
        writeln!(out, "{}", reply.text)?;
        if let Some(snapshot) = reply.analysis {
            record.snapshots.push(snapshot);
        }
        replies += 1;
    }
    out.flush()?;

    record.messages.extend_from_slice(tutor.transcript());
    record.samples = tutor.analyzer().history().await.samples().to_vec();
    record.alerts.extend(alerts.all());
    record.save(store, session).await?;

    info!(session = %session, replies, "chat session saved");
    Ok(replies)
}

/// Gather clinical records and, when `session` is given, that session's
/// conversation into a [`ReportData`].
///
/// The patient name stored with the records wins over `fallback_name`.
pub async fn load_report_data(
    store: &dyn KeyValueStore,
    session: Option<Uuid>,
    fallback_name: &str,
) -> Result<ReportData> {
    let patient_name = load_state::<String>(store, storage_keys::PATIENT_NAME)
        .await?
        .unwrap_or_else(|| fallback_name.to_string());

    let (messages, snapshots) = match session {
        Some(session) => {
            let record = SessionRecord::load(store, session).await?;
            (record.messages, record.snapshots)
        }
        None => (Vec::new(), Vec::new()),
    };

    Ok(ReportData {
        patient_name,
        messages,
        snapshots,
        assessments: load_state_or_default(store, storage_keys::ASSESSMENTS).await?,
        treatment_plans: load_state_or_default(store, storage_keys::TREATMENT_PLANS).await?,
        lab_results: load_state_or_default(store, storage_keys::LAB_RESULTS).await?,
        appointments: load_state_or_default(store, storage_keys::APPOINTMENTS).await?,
        medications: load_state_or_default(store, storage_keys::MEDICATIONS).await?,
        activities: load_state_or_default(store, storage_keys::ACTIVITIES).await?,
        cognitive_notes: load_state_or_default(store, storage_keys::COGNITIVE_NOTES).await?,
    })
}

pub async fn report(
    store: &dyn KeyValueStore,
    session: Option<Uuid>,
    kind: ReportKind,
    fallback_name: &str,
    now: &Zoned,
) -> Result<String> {
    let data = load_report_data(store, session, fallback_name).await?;
    Ok(render_report(&data, kind, now)?)
}

/// Record a dose of medication `id` taken at `now` and store its next due
/// time.
pub async fn mark_medication_taken(
    store: &dyn KeyValueStore,
    id: Uuid,
    now: &Zoned,
) -> Result<Medication> {
    let mut medications: Vec<Medication> =
        load_state_or_default(store, storage_keys::MEDICATIONS).await?;
    let medication = medications
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| eyre::eyre!("no medication with id {id}"))?;
    medication.mark_taken(now)?;
    let taken = medication.clone();
    save_state(store, storage_keys::MEDICATIONS, &medications).await?;

    info!(medication = %taken.name, "dose recorded");
    Ok(taken)
}

/// Print medications due within the next hour, or already overdue.
pub async fn upcoming_medications<W: Write>(
    store: &dyn KeyValueStore,
    now: &Zoned,
    out: &mut W,
) -> Result<usize> {
    let medications: Vec<Medication> =
        load_state_or_default(store, storage_keys::MEDICATIONS).await?;
    let upcoming = health::upcoming_medications(&medications, now.timestamp());
    for m in &upcoming {
        let due = m
            .next_due
            .map(|ts| ts.to_zoned(now.time_zone().clone()).strftime("%H:%M").to_string())
            .unwrap_or_default();
        let late = if m.is_overdue(now.timestamp()) { " (atrasada)" } else { "" };
        writeln!(out, "{due} {} {}{late}", m.name, m.dosage)?;
    }
    Ok(upcoming.len())
}

/// Mark activity `id` done at `now`.
pub async fn complete_activity(
    store: &dyn KeyValueStore,
    id: Uuid,
    notes: Option<String>,
    now: jiff::Timestamp,
) -> Result<DailyActivity> {
    let mut activities: Vec<DailyActivity> =
        load_state_or_default(store, storage_keys::ACTIVITIES).await?;
    let activity = activities
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| eyre::eyre!("no activity with id {id}"))?;
    activity.mark_completed(now, notes);
    let done = activity.clone();
    save_state(store, storage_keys::ACTIVITIES, &activities).await?;

    info!(activity = %done.name, "activity completed");
    Ok(done)
}

/// Print the activities still to do today, earliest first.
pub async fn pending_activities<W: Write>(store: &dyn KeyValueStore, out: &mut W) -> Result<usize> {
    let activities: Vec<DailyActivity> =
        load_state_or_default(store, storage_keys::ACTIVITIES).await?;
    let pending = health::pending_activities(&activities);
    for a in &pending {
        let time = a.scheduled_time.as_deref().unwrap_or("--:--");
        writeln!(out, "{time} {} ({})", a.name, a.id)?;
    }
    Ok(pending.len())
}

/// Start a new day: every activity back to pending.
pub async fn reset_routine(store: &dyn KeyValueStore) -> Result<usize> {
    let mut activities: Vec<DailyActivity> =
        load_state_or_default(store, storage_keys::ACTIVITIES).await?;
    health::reset_daily_activities(&mut activities);
    save_state(store, storage_keys::ACTIVITIES, &activities).await?;

    info!(activities = activities.len(), "daily routine reset");
    Ok(activities.len())
}

/// List the aggregation policies, marking the configured one.
pub fn policies<W: Write>(configured: &str, out: &mut W) -> Result<()> {
    for policy in memora_analysis::all_policies() {
        let marker = if policy.id() == configured { "*" } else { " " };
        writeln!(out, "{marker} {:<10} {}", policy.id(), policy.name())?;
    }
    Ok(())
}

fn patient_message(text: &str, timestamp: jiff::Timestamp) -> ConversationMessage {
    ConversationMessage {
        speaker: Speaker::Patient,
        text: text.to_string(),
        timestamp,
    }
}
