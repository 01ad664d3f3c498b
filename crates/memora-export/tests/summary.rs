use memora_core::models::risk::RiskLevel;
use memora_core::models::signal::{BehavioralPattern, EmotionKind, EmotionalState};
use memora_core::models::snapshot::{LanguageMetrics, MetricSnapshot, SpeechPatterns};
use memora_export::CognitiveSummary;
use memora_export::scale::{format_out_of_ten, format_percent, out_of_ten};

fn snapshot(temporal: f64, coherence: f64, memory: f64, concerns: usize) -> MetricSnapshot {
    MetricSnapshot {
        captured_at: jiff::Timestamp::UNIX_EPOCH,
        policy: "simple".to_string(),
        cognitive_score: (temporal + coherence + memory) / 3.0,
        temporal_orientation: temporal,
        spatial_orientation: 1.0,
        short_term_memory: 1.0,
        long_term_memory: 1.0,
        memory_consistency: memory,
        emotional_state: EmotionalState {
            primary: EmotionKind::Confused,
            confidence: 0.5,
        },
        speech_patterns: SpeechPatterns {
            coherence,
            fluency: 1.0,
            vocabulary: 1.0,
            repetition: 1.0,
        },
        language: LanguageMetrics {
            complexity: 0.5,
            grammar_accuracy: 1.0,
        },
        behavior: BehavioralPattern::default(),
        concerns: (0..concerns).map(|i| format!("concern {i}")).collect(),
        recommendations: Vec::new(),
        risk_level: RiskLevel::Moderate,
        degraded_signals: Vec::new(),
    }
}

#[test]
fn scores_convert_to_ten_point_scale() {
    assert_eq!(out_of_ten(0.0), 0.0);
    assert_eq!(out_of_ten(1.0), 10.0);
    assert_eq!(out_of_ten(0.756), 7.6);
    assert_eq!(out_of_ten(1.7), 10.0);
    assert_eq!(out_of_ten(-0.2), 0.0);
    assert_eq!(out_of_ten(f64::NAN), 0.0);
    assert_eq!(format_out_of_ten(0.75), "7.5/10");
    assert_eq!(format_percent(0.856), "86%");
}

#[test]
fn no_snapshots_no_summary() {
    assert!(CognitiveSummary::from_snapshots(&[]).is_none());
}

#[test]
fn recommendations_follow_weak_domains() {
    let summary = CognitiveSummary::from_snapshots(&[snapshot(0.5, 0.9, 0.6, 0)]).unwrap();
    assert_eq!(
        summary.recommendations,
        vec![
            "Reforçar exercícios de orientação temporal".to_string(),
            "Aumentar atividades de memória".to_string(),
        ]
    );
    assert_eq!(summary.activity_level, "Normal - Participação adequada");
    assert_eq!(summary.overall_assessment, "Progresso satisfatório");
    assert_eq!(summary.trend, "Sessão única");
    assert_eq!(summary.emotional_state, "Confuso");
    assert_eq!(summary.risk_level, "Moderado");
}

#[test]
fn averages_span_every_snapshot() {
    let summary = CognitiveSummary::from_snapshots(&[
        snapshot(0.9, 0.9, 0.9, 0),
        snapshot(0.5, 0.5, 0.5, 0),
    ])
    .unwrap();
    assert_eq!(summary.sessions, 2);
    assert_eq!(summary.temporal_orientation, 7.0);
    assert_eq!(summary.memory_consistency, 7.0);
    assert_eq!(summary.trend, "Em declínio");
}

#[test]
fn many_concerns_escalate_next_steps() {
    let calm = CognitiveSummary::from_snapshots(&[snapshot(0.9, 0.9, 0.9, 0)]).unwrap();
    assert_eq!(calm.next_steps, "Manter programa atual com monitorização regular");
    assert_eq!(calm.activity_level, "Alto - Boa participação e engajamento");

    let one = CognitiveSummary::from_snapshots(&[snapshot(0.9, 0.9, 0.9, 1)]).unwrap();
    assert_eq!(one.next_steps, "Aumentar frequência de sessões de estimulação cognitiva");

    let many = CognitiveSummary::from_snapshots(&[snapshot(0.9, 0.9, 0.9, 3)]).unwrap();
    assert_eq!(many.next_steps, "Agendar avaliação detalhada com equipa multidisciplinar");

    let low = CognitiveSummary::from_snapshots(&[snapshot(0.2, 0.3, 0.3, 0)]).unwrap();
    assert_eq!(low.overall_assessment, "Requer atenção especial");
    assert_eq!(low.activity_level, "Baixo - Necessita maior estímulo");
}
