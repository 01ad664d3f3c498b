use jiff::Zoned;
use jiff::civil::date;
use jiff::tz::TimeZone;
use memora_core::models::appointment::{Appointment, AppointmentStatus, LabResult};
use memora_core::models::conversation::{ConversationMessage, Speaker};
use memora_core::models::health::{ActivityKind, DailyActivity, Importance};
use memora_core::models::risk::RiskLevel;
use memora_core::models::signal::{BehavioralPattern, EmotionKind, EmotionalState};
use memora_core::models::snapshot::{LanguageMetrics, MetricSnapshot, SpeechPatterns};
use memora_export::report::report_filename;
use memora_export::{ReportData, ReportKind, render_report};
use uuid::Uuid;

fn now() -> Zoned {
    date(2026, 10, 19).at(15, 30, 0, 0).to_zoned(TimeZone::UTC).unwrap()
}

fn snapshot(score: f64, concerns: &[&str]) -> MetricSnapshot {
    MetricSnapshot {
        captured_at: now().timestamp(),
        policy: "weighted".to_string(),
        cognitive_score: score,
        temporal_orientation: score,
        spatial_orientation: score,
        short_term_memory: score,
        long_term_memory: score,
        memory_consistency: score,
        emotional_state: EmotionalState {
            primary: EmotionKind::Positive,
            confidence: 0.8,
        },
        speech_patterns: SpeechPatterns {
            coherence: score,
            fluency: score,
            vocabulary: score,
            repetition: 1.0,
        },
        language: LanguageMetrics {
            complexity: 0.5,
            grammar_accuracy: 1.0,
        },
        behavior: BehavioralPattern::default(),
        concerns: concerns.iter().map(|c| c.to_string()).collect(),
        recommendations: Vec::new(),
        risk_level: RiskLevel::from_average(score),
        degraded_signals: Vec::new(),
    }
}

fn patient() -> ReportData {
    let at = now().timestamp();
    ReportData {
        patient_name: "Maria Silva".to_string(),
        messages: vec![
            ConversationMessage {
                speaker: Speaker::Tutor,
                text: "Bom dia! Como está hoje?".to_string(),
                timestamp: at,
            },
            ConversationMessage {
                speaker: Speaker::Patient,
                text: "Estou bem, fui ao jardim.".to_string(),
                timestamp: at,
            },
        ],
        appointments: vec![Appointment {
            id: Uuid::new_v4(),
            kind: "Neurologia".to_string(),
            doctor: "Dr. Costa".to_string(),
            room: "12".to_string(),
            date: date(2026, 10, 21),
            time: "09:30".to_string(),
            notes: None,
            status: AppointmentStatus::Scheduled,
        }],
        lab_results: vec![LabResult {
            id: Uuid::new_v4(),
            kind: "Ressonância".to_string(),
            doctor: "Dra. Lima".to_string(),
            date: date(2026, 10, 1),
            result: None,
            attachment_url: None,
        }],
        activities: vec![DailyActivity {
            id: Uuid::new_v4(),
            kind: ActivityKind::Meal,
            name: "Almoço".to_string(),
            completed: true,
            time_completed: Some(at),
            notes: None,
            importance: Importance::High,
            scheduled_time: Some("12:30".to_string()),
        }],
        ..ReportData::default()
    }
}

#[test]
fn full_report_has_every_section_in_order() {
    let report = render_report(&patient(), ReportKind::Full, &now()).unwrap();

    let headings = [
        "RELATÓRIO COMPLETO DE AVALIAÇÃO - ALZHEIMER",
        "1. DIÁLOGO COM ASSISTENTE",
        "2. AVALIAÇÕES NEUROLÓGICAS",
        "3. PLANOS DE TRATAMENTO",
        "4. EXAMES",
        "5. CONSULTAS",
        "6. MEDICAÇÕES ATUAIS",
        "7. ATIVIDADES DIÁRIAS",
        "8. NOTAS DE ANÁLISE COGNITIVA",
        "Relatório gerado automaticamente",
    ];
    let mut cursor = 0;
    for heading in headings {
        let found = report[cursor..]
            .find(heading)
            .unwrap_or_else(|| panic!("missing or out of order: {heading}"));
        cursor += found + heading.len();
    }
}

#[test]
fn full_report_renders_records_with_portuguese_labels() {
    let report = render_report(&patient(), ReportKind::Full, &now()).unwrap();

    assert!(report.contains("Paciente: Maria Silva"));
    assert!(report.contains("Data do Relatório: 19/10/2026 15:30"));
    assert!(report.contains("[19/10/2026 15:30] Assistente: Bom dia! Como está hoje?"));
    assert!(report.contains("[19/10/2026 15:30] Paciente: Estou bem, fui ao jardim."));
    assert!(report.contains("Data: 21/10/2026 às 09:30"));
    assert!(report.contains("Status: Agendada"));
    assert!(report.contains("Resultado: Não informado"));
    assert!(report.contains("Tipo: Refeição"));
    assert!(report.contains("Importância: Alta"));
    assert!(report.contains("Status: Concluída"));
}

#[test]
fn empty_sections_say_so() {
    let report = render_report(&patient(), ReportKind::Full, &now()).unwrap();
    let assessments = report
        .split("2. AVALIAÇÕES NEUROLÓGICAS")
        .nth(1)
        .and_then(|rest| rest.split("3. PLANOS").next())
        .unwrap();
    assert!(assessments.contains("Sem registos."));
    assert!(report.contains("Sem análises registadas."));
}

#[test]
fn text_is_not_html_escaped() {
    let mut data = patient();
    data.messages[1].text = "Eu & a <Ana> fomos".to_string();
    let report = render_report(&data, ReportKind::Dialog, &now()).unwrap();
    assert!(report.contains("Paciente: Eu & a <Ana> fomos"));
}

#[test]
fn summary_shows_scores_out_of_ten() {
    let mut data = patient();
    data.snapshots = vec![snapshot(0.6, &[]), snapshot(0.8, &[])];
    let report = render_report(&data, ReportKind::Full, &now()).unwrap();

    assert!(report.contains("Sessões analisadas: 2"));
    assert!(report.contains("Orientação Temporal: 7.0/10"));
    assert!(report.contains("Coerência do Discurso: 7.0/10"));
    assert!(report.contains("Tendência: Em melhoria"));
    assert!(report.contains("Nenhuma preocupação significativa identificada"));
    assert!(report.contains("Manter rotina atual de atividades."));
}

#[test]
fn dialog_report_lists_latest_concerns() {
    let mut data = patient();
    data.snapshots = vec![snapshot(0.3, &["Time disorientation", "Signs of confusion detected"])];
    let report = render_report(&data, ReportKind::Dialog, &now()).unwrap();

    assert!(report.starts_with("Relatório de Diálogo - Paciente: Maria Silva"));
    assert!(report.contains("   - Time disorientation"));
    assert!(report.contains("   - Signs of confusion detected"));
    assert!(report.contains("Nível de risco: Alto"));
    assert!(report.contains("Reforçar exercícios de orientação temporal"));
    assert!(report.contains("Requer atenção especial"));
    assert!(!report.contains("2. AVALIAÇÕES NEUROLÓGICAS"));
}

#[test]
fn filename_is_derived_from_patient_and_date() {
    assert_eq!(
        report_filename(ReportKind::Full, "Maria  da Silva", date(2026, 10, 19)),
        "relatorio_maria_da_silva_2026-10-19.txt"
    );
    assert_eq!(
        report_filename(ReportKind::Dialog, "", date(2026, 10, 19)),
        "dialogo_paciente_2026-10-19.txt"
    );
}

#[test]
fn report_data_deserializes_with_missing_lists() {
    let data: ReportData = serde_json::from_str(r#"{"patient_name":"João"}"#).unwrap();
    assert!(data.messages.is_empty());
    assert!(data.snapshots.is_empty());
    let report = render_report(&data, ReportKind::Full, &now()).unwrap();
    assert!(report.contains("Paciente: João"));
}
