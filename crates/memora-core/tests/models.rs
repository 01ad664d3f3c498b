use jiff::Timestamp;
use memora_core::models::alert::CaregiverAlert;
use memora_core::models::health::{
    ActivityKind, DailyActivity, DoseFrequency, Importance, Medication, activities_of_kind,
    completed_activities, medication_schedule, pending_activities, reset_daily_activities,
    upcoming_medications,
};
use memora_core::models::risk::{RiskLevel, RiskNaming};
use memora_core::models::sample::{History, TextSample};
use memora_core::models::signal::{EmotionKind, SignalSet};
use memora_core::models::snapshot::{LanguageMetrics, MetricSnapshot, SpeechPatterns};
use memora_core::storage_keys;
use uuid::Uuid;

fn snapshot(score: f64, concerns: Vec<String>) -> MetricSnapshot {
    let signals = SignalSet::uniform(score);
    MetricSnapshot {
        captured_at: Timestamp::UNIX_EPOCH,
        policy: "simple".to_string(),
        cognitive_score: score,
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
        concerns,
        recommendations: Vec::new(),
        risk_level: RiskLevel::from_average(score),
        degraded_signals: Vec::new(),
    }
}

#[test]
fn risk_thresholds_are_inclusive() {
    assert_eq!(RiskLevel::from_average(0.7), RiskLevel::Low);
    assert_eq!(RiskLevel::from_average(0.69), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_average(0.4), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_average(0.39), RiskLevel::High);
    assert!(RiskLevel::High > RiskLevel::Moderate);
}

#[test]
fn risk_has_two_namings_for_one_scale() {
    assert_eq!(RiskLevel::Moderate.name(RiskNaming::Clinical), "moderate");
    assert_eq!(RiskLevel::Moderate.name(RiskNaming::Alerting), "attention");
    assert_eq!("urgent".parse::<RiskLevel>().unwrap(), RiskLevel::High);
    assert_eq!(" Low ".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
    assert!("severe".parse::<RiskLevel>().is_err());

    let parsed: RiskLevel = serde_json::from_str(r#""normal""#).unwrap();
    assert_eq!(parsed, RiskLevel::Low);
    assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""low""#);
}

#[test]
fn emotion_kinds_parse_from_their_names() {
    for kind in [
        EmotionKind::Positive,
        EmotionKind::Negative,
        EmotionKind::Neutral,
        EmotionKind::Confused,
        EmotionKind::Fatigued,
    ] {
        assert_eq!(kind.as_str().parse::<EmotionKind>().unwrap(), kind);
    }
    assert!("angry".parse::<EmotionKind>().is_err());
}

#[test]
fn snapshot_rebuilds_its_signal_set() {
    assert_eq!(snapshot(0.6, Vec::new()).signals(), SignalSet::uniform(0.6));
}

#[test]
fn history_windows_exclude_the_latest_sample() {
    let mut history = History::new();
    assert!(history.is_empty());
    for text in ["a", "b", "c", "d"] {
        history.record_sample(TextSample::new(text, Timestamp::UNIX_EPOCH));
    }
    let texts = |samples: &[TextSample]| samples.iter().map(|s| s.text.clone()).collect::<Vec<_>>();

    assert_eq!(texts(history.recent_samples(2)), ["c", "d"]);
    assert_eq!(texts(history.prior_samples(2)), ["b", "c"]);
    assert_eq!(texts(history.prior_samples(10)), ["a", "b", "c"]);
    assert!(History::new().prior_samples(3).is_empty());
}

#[test]
fn recent_scores_are_oldest_first() {
    let mut history = History::new();
    for score in [0.2, 0.4, 0.6] {
        history.record_snapshot(snapshot(score, Vec::new()));
    }
    assert_eq!(history.recent_scores(2), vec![0.4, 0.6]);
    assert_eq!(history.recent_scores(9).len(), 3);
}

#[test]
fn alert_message_lists_concerns() {
    let quiet = CaregiverAlert::from_snapshot(&snapshot(0.3, Vec::new()));
    assert_eq!(quiet.message, "Cognitive alert: risk level high");
    assert_eq!(quiet.level, RiskLevel::High);

    let busy = CaregiverAlert::from_snapshot(&snapshot(
        0.5,
        vec!["Time disorientation".to_string(), "Signs of confusion detected".to_string()],
    ));
    assert_eq!(
        busy.message,
        "Cognitive alert: Time disorientation, Signs of confusion detected"
    );
    assert_eq!(busy.metrics.temporal_orientation, 0.5);
}

#[test]
fn alert_level_is_written_with_alerting_names() {
    let alert = CaregiverAlert::from_snapshot(&snapshot(0.5, Vec::new()));
    let json = serde_json::to_value(&alert).unwrap();
    assert_eq!(json["level"], "attention");

    let back: CaregiverAlert = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(back, alert);

    let mut clinical = json;
    clinical["level"] = "high".into();
    let back: CaregiverAlert = serde_json::from_value(clinical).unwrap();
    assert_eq!(back.level, RiskLevel::High);
}

#[test]
fn overdue_medication() {
    let due: Timestamp = "2026-10-19T08:00:00Z".parse().unwrap();
    let med = Medication {
        id: Uuid::new_v4(),
        name: "Donepezilo".to_string(),
        dosage: "5 mg".to_string(),
        frequency: "1x/dia".to_string(),
        time_of_day: vec!["08:00".to_string()],
        instructions: String::new(),
        last_taken: None,
        next_due: Some(due),
    };
    assert!(med.is_overdue("2026-10-19T09:00:00Z".parse().unwrap()));
    assert!(!med.is_overdue("2026-10-19T07:00:00Z".parse().unwrap()));
}

fn medication(name: &str, frequency: &str, next_due: Option<&str>) -> Medication {
    Medication {
        id: Uuid::new_v4(),
        name: name.to_string(),
        dosage: "10 mg".to_string(),
        frequency: frequency.to_string(),
        time_of_day: Vec::new(),
        instructions: String::new(),
        last_taken: None,
        next_due: next_due.map(|t| t.parse().unwrap()),
    }
}

fn activity(name: &str, kind: ActivityKind, scheduled: Option<&str>) -> DailyActivity {
    DailyActivity {
        id: Uuid::new_v4(),
        kind,
        name: name.to_string(),
        completed: false,
        time_completed: None,
        notes: None,
        importance: Importance::Medium,
        scheduled_time: scheduled.map(str::to_string),
    }
}

fn lisbon(date: &str) -> jiff::Zoned {
    format!("{date}[Europe/Lisbon]").parse().unwrap()
}

#[test]
fn dose_frequency_parses_known_names() {
    assert_eq!(DoseFrequency::parse("Twice Daily"), DoseFrequency::TwiceDaily);
    assert_eq!(DoseFrequency::parse(" semanal "), DoseFrequency::Weekly);
    assert_eq!(DoseFrequency::parse("monthly"), DoseFrequency::Monthly);
    assert_eq!(DoseFrequency::parse("daily"), DoseFrequency::Daily);
    assert_eq!(DoseFrequency::parse("quando necessário"), DoseFrequency::Daily);
}

#[test]
fn taking_a_dose_schedules_the_next_one() {
    let now = lisbon("2026-10-19T08:00:00+01:00");

    let mut twice = medication("Memantina", "twice daily", None);
    twice.mark_taken(&now).unwrap();
    assert_eq!(twice.last_taken, Some(now.timestamp()));
    assert_eq!(
        twice.next_due,
        Some("2026-10-19T19:00:00Z".parse::<Timestamp>().unwrap())
    );

    let mut weekly = medication("Vitamina D", "weekly", None);
    weekly.mark_taken(&now).unwrap();
    assert_eq!(
        weekly.next_due,
        Some("2026-10-26T08:00:00Z".parse::<Timestamp>().unwrap())
    );

    let mut monthly = medication("B12", "monthly", None);
    monthly.mark_taken(&lisbon("2026-01-31T09:00:00+00:00")).unwrap();
    assert_eq!(
        monthly.next_due,
        Some("2026-02-28T09:00:00Z".parse::<Timestamp>().unwrap())
    );
}

#[test]
fn daily_dose_keeps_wall_clock_time_across_dst() {
    // Lisbon leaves summer time on 2026-10-25.
    let mut med = medication("Donepezilo", "daily", None);
    med.mark_taken(&lisbon("2026-10-24T08:00:00+01:00")).unwrap();
    assert_eq!(
        med.next_due,
        Some("2026-10-25T08:00:00Z".parse::<Timestamp>().unwrap())
    );
}

#[test]
fn upcoming_includes_overdue_and_next_hour_only() {
    let now: Timestamp = "2026-10-19T12:00:00Z".parse().unwrap();
    let meds = vec![
        medication("late", "daily", Some("2026-10-19T11:00:00Z")),
        medication("soon", "daily", Some("2026-10-19T12:45:00Z")),
        medication("edge", "daily", Some("2026-10-19T13:00:00Z")),
        medication("later", "daily", Some("2026-10-19T15:00:00Z")),
        medication("unscheduled", "daily", None),
    ];
    let names: Vec<&str> = upcoming_medications(&meds, now)
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, ["late", "soon", "edge"]);
}

#[test]
fn schedule_puts_unscheduled_last() {
    let meds = vec![
        medication("none", "daily", None),
        medication("b", "daily", Some("2026-10-19T20:00:00Z")),
        medication("a", "daily", Some("2026-10-19T08:00:00Z")),
    ];
    let names: Vec<&str> = medication_schedule(&meds).iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "none"]);
}

#[test]
fn routine_lists_pending_and_completed_in_order() {
    let mut activities = vec![
        activity("jantar", ActivityKind::Meal, Some("19:00")),
        activity("leitura", ActivityKind::Cognitive, None),
        activity("banho", ActivityKind::Hygiene, Some("08:30")),
        activity("caminhada", ActivityKind::Exercise, Some("10:00")),
    ];
    activities[3].mark_completed("2026-10-19T10:30:00Z".parse().unwrap(), None);
    activities[2].mark_completed(
        "2026-10-19T09:00:00Z".parse().unwrap(),
        Some("Com ajuda".to_string()),
    );

    let names = |list: Vec<&DailyActivity>| -> Vec<String> {
        list.iter().map(|a| a.name.clone()).collect()
    };
    assert_eq!(names(pending_activities(&activities)), ["jantar", "leitura"]);

    let done = names(completed_activities(&activities));
    assert_eq!(done, ["caminhada", "banho"]);
    assert_eq!(activities[2].notes.as_deref(), Some("Com ajuda"));
    assert_eq!(activities_of_kind(&activities, ActivityKind::Meal).len(), 1);

    reset_daily_activities(&mut activities);
    assert!(
        activities
            .iter()
            .all(|a| !a.completed && a.time_completed.is_none() && a.notes.is_none())
    );
}

#[test]
fn storage_keys_are_namespaced_by_session() {
    let session = Uuid::nil();
    assert_eq!(
        storage_keys::session_snapshots(session),
        "sessions/00000000-0000-0000-0000-000000000000/snapshots"
    );
    assert!(storage_keys::session_alerts(session).ends_with("/alerts"));
    assert!(storage_keys::MEDICATIONS.starts_with("records/"));
}
