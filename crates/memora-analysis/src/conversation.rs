use std::sync::Arc;

use jiff::civil::Weekday;
use memora_core::models::alert::{AlertSink, CaregiverAlert};
use memora_core::models::sample::{History, TextSample};
use memora_core::models::signal::{BehavioralPattern, EmotionalState, SignalKind, SignalSet};
use memora_core::models::snapshot::{LanguageMetrics, MetricSnapshot, SpeechPatterns};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::AggregationPolicy;
use crate::clock::{Clock, SystemClock};
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::normalize::{normalize, Normalized};
use crate::signals::{behavior, emotion, language, memory, orientation, speech};

/// Neutral default for complexity when it cannot be computed.
const NEUTRAL_COMPLEXITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No interaction analyzed yet.
    Idle,
    Active,
}

/// Stateful analyzer for one conversation.
///
/// Owns the conversation [`History`] exclusively. Each call to
/// [`analyze_interaction`](Self::analyze_interaction) appends the sample and,
/// when aggregation succeeds, the resulting snapshot.
pub struct ConversationAnalyzer {
    config: AnalyzerConfig,
    policy: Box<dyn AggregationPolicy>,
    clock: Arc<dyn Clock>,
    sink: Option<Arc<dyn AlertSink>>,
    history: History,
}

impl ConversationAnalyzer {
    /// Build an analyzer from `config`, on the system clock, with no sink.
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        let policy = config.build_policy()?;
        Ok(Self {
            config,
            policy,
            clock: Arc::new(SystemClock),
            sink: None,
            history: History::new(),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn AlertSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the configured policy.
    pub fn with_policy(mut self, policy: Box<dyn AggregationPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Resume a conversation from a previously persisted history.
    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    pub fn state(&self) -> SessionState {
        if self.history.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Active
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn policy(&self) -> &dyn AggregationPolicy {
        self.policy.as_ref()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one patient turn.
    ///
    /// Input is rejected with [`AnalysisError::InvalidInput`] before any
    /// state changes. Past validation the sample is always recorded; an
    /// [`AnalysisError::AnalysisFailure`] leaves it in place without a
    /// snapshot. Alert delivery failures are logged and never returned.
    pub fn analyze_interaction(&mut self, text: &str) -> Result<MetricSnapshot, AnalysisError> {
        self.validate_input(text)?;

        let now = self.clock.now();
        let captured_at = now.timestamp();
        self.history.record_sample(TextSample::new(text, captured_at));

        let current = normalize(text);
        let recent = self.prior_window(self.config.history_window);
        let older = self.prior_window(self.config.contradiction_window);
        let scores = self.history.recent_scores(self.config.consistency_window);

        let (signals, degraded_signals) =
            self.compute_signals(&current, &recent, &older, &scores, now.weekday());

        let aggregate = self.policy.aggregate(&signals).inspect_err(|e| {
            warn!(policy = self.policy.id(), error = %e, "aggregation failed, no snapshot recorded");
        })?;

        let snapshot = MetricSnapshot {
            captured_at,
            policy: self.policy.id().to_string(),
            cognitive_score: aggregate.composite_score,
            temporal_orientation: signals.temporal_orientation,
            spatial_orientation: signals.spatial_orientation,
            short_term_memory: signals.short_term_memory,
            long_term_memory: signals.long_term_memory,
            memory_consistency: signals.memory_consistency,
            emotional_state: signals.emotional_state,
            speech_patterns: SpeechPatterns {
                coherence: signals.coherence,
                fluency: signals.fluency,
                vocabulary: signals.vocabulary,
                repetition: signals.repetition_freedom,
            },
            language: LanguageMetrics {
                complexity: signals.complexity,
                grammar_accuracy: signals.grammar_accuracy,
            },
            behavior: signals.behavior,
            concerns: aggregate.concerns,
            recommendations: aggregate.recommendations,
            risk_level: aggregate.risk_level,
            degraded_signals,
        };
        self.history.record_snapshot(snapshot.clone());

        info!(
            policy = %snapshot.policy,
            cognitive_score = snapshot.cognitive_score,
            risk_level = %snapshot.risk_level,
            concerns = snapshot.concerns.len(),
            "interaction analyzed"
        );

        if snapshot.risk_level >= self.config.alert_threshold {
            self.raise_alert(&snapshot);
        }

        Ok(snapshot)
    }

    fn validate_input(&self, text: &str) -> Result<(), AnalysisError> {
        if text.contains('\0') {
            return Err(AnalysisError::InvalidInput(
                "text contains a NUL character".to_string(),
            ));
        }
        let chars = text.chars().count();
        if chars > self.config.max_input_chars {
            return Err(AnalysisError::InvalidInput(format!(
                "text has {chars} characters, limit is {}",
                self.config.max_input_chars
            )));
        }
        Ok(())
    }

    /// Up to `n` samples before the current one, normalized.
    fn prior_window(&self, n: usize) -> Vec<Normalized> {
        self.history
            .prior_samples(n)
            .iter()
            .map(|s| normalize(&s.text))
            .collect()
    }

    fn compute_signals(
        &self,
        text: &Normalized,
        recent: &[Normalized],
        older: &[Normalized],
        scores: &[f64],
        today: Weekday,
    ) -> (SignalSet, Vec<SignalKind>) {
        let lexicon = &self.config.lexicon;
        let mut guard = SignalGuard::new();

        let emotional_state = guard.emotional_state(emotion::emotional_state(text, lexicon));
        let behavior = guard.behavior(behavior::behavioral_pattern(text, lexicon));

        let signals = SignalSet {
            temporal_orientation: guard.score(
                SignalKind::TemporalOrientation,
                orientation::temporal_orientation(text, lexicon, today),
            ),
            spatial_orientation: guard.score(
                SignalKind::SpatialOrientation,
                orientation::spatial_orientation(text, lexicon),
            ),
            coherence: guard.score(SignalKind::Coherence, speech::coherence(text, lexicon)),
            fluency: guard.score(SignalKind::Fluency, speech::fluency(text, lexicon)),
            vocabulary: guard.score(SignalKind::Vocabulary, speech::vocabulary(text)),
            complexity: guard.score(SignalKind::Complexity, language::complexity(text)),
            grammar_accuracy: guard.score(
                SignalKind::GrammarAccuracy,
                language::grammar_accuracy(text, lexicon),
            ),
            repetition_freedom: guard.score(
                SignalKind::RepetitionFreedom,
                speech::repetition_freedom(text, recent),
            ),
            short_term_memory: guard.score(
                SignalKind::ShortTermMemory,
                memory::short_term_memory(text, recent),
            ),
            long_term_memory: guard.score(
                SignalKind::LongTermMemory,
                memory::long_term_memory(scores, self.config.consistency_window),
            ),
            memory_consistency: guard.score(
                SignalKind::MemoryConsistency,
                memory::memory_consistency(text, older, lexicon),
            ),
            emotional_state,
            behavior,
        };

        (signals, guard.into_degraded())
    }

    fn raise_alert(&self, snapshot: &MetricSnapshot) {
        let Some(sink) = &self.sink else {
            return;
        };
        let alert = CaregiverAlert::from_snapshot(snapshot);
        let level = alert.level;
        if let Err(e) = sink.notify(alert) {
            warn!(risk_level = %level, error = %e, "alert delivery failed");
        }
    }
}

/// Value a numeric signal falls back to when it cannot be computed.
pub fn neutral_default(kind: SignalKind) -> f64 {
    match kind {
        SignalKind::Complexity => NEUTRAL_COMPLEXITY,
        _ => 1.0,
    }
}

/// Replaces signals that could not be computed with their neutral default
/// and records which ones were replaced, in call order.
#[derive(Debug, Default)]
pub struct SignalGuard {
    degraded: Vec<SignalKind>,
}

impl SignalGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// `value` when finite, otherwise [`neutral_default`] for `kind`.
    pub fn score(&mut self, kind: SignalKind, value: f64) -> f64 {
        if value.is_finite() {
            value
        } else {
            self.degrade(kind);
            neutral_default(kind)
        }
    }

    pub fn emotional_state(&mut self, state: EmotionalState) -> EmotionalState {
        if state.confidence.is_finite() {
            state
        } else {
            self.degrade(SignalKind::EmotionalState);
            EmotionalState::default()
        }
    }

    pub fn behavior(&mut self, pattern: BehavioralPattern) -> BehavioralPattern {
        let finite = [
            pattern.repetitive_actions,
            pattern.agitation,
            pattern.confusion,
            pattern.social_withdrawal,
        ]
        .iter()
        .all(|v| v.is_finite());
        if finite {
            pattern
        } else {
            self.degrade(SignalKind::Behavior);
            BehavioralPattern::default()
        }
    }

    pub fn degraded(&self) -> &[SignalKind] {
        &self.degraded
    }

    pub fn into_degraded(self) -> Vec<SignalKind> {
        self.degraded
    }

    fn degrade(&mut self, kind: SignalKind) {
        warn!(signal = ?kind, "signal could not be computed, using neutral default");
        self.degraded.push(kind);
    }
}

/// A [`ConversationAnalyzer`] shared between tasks.
///
/// Calls are serialized: concurrent `analyze_interaction` calls run one at a
/// time, in lock acquisition order.
#[derive(Clone)]
pub struct SharedAnalyzer {
    inner: Arc<Mutex<ConversationAnalyzer>>,
}

impl SharedAnalyzer {
    pub fn new(analyzer: ConversationAnalyzer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(analyzer)),
        }
    }

    pub async fn analyze_interaction(&self, text: &str) -> Result<MetricSnapshot, AnalysisError> {
        self.inner.lock().await.analyze_interaction(text)
    }

    /// A copy of the history at this point.
    pub async fn history(&self) -> History {
        self.inner.lock().await.history().clone()
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state()
    }
}
