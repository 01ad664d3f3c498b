//! Patient report generation.
//!
//! [`ReportData`] is the input contract: everything the caller has on file
//! for one patient. [`render_report`] flattens it into a display view
//! (Portuguese labels, local-time dates, "/10" scores) and renders one of
//! the built-in plain-text templates.

use jiff::Zoned;
use jiff::tz::TimeZone;
use memora_core::models::appointment::{Appointment, LabResult};
use memora_core::models::assessment::NeurologicalAssessment;
use memora_core::models::conversation::{ConversationMessage, Speaker};
use memora_core::models::health::{
    DailyActivity, Medication, completed_activities, medication_schedule, pending_activities,
};
use memora_core::models::note::CognitiveNote;
use memora_core::models::snapshot::MetricSnapshot;
use memora_core::models::treatment::TreatmentPlan;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ExportError;
use crate::health::HealthSummary;
use crate::labels;
use crate::render::render_template;
use crate::summary::CognitiveSummary;

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

const NOT_INFORMED: &str = "Não informado";

/// Everything on file for one patient. Each list is optional when
/// deserializing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportData {
    pub patient_name: String,
    pub messages: Vec<ConversationMessage>,
    /// Analysis snapshots in capture order.
    pub snapshots: Vec<MetricSnapshot>,
    pub assessments: Vec<NeurologicalAssessment>,
    pub treatment_plans: Vec<TreatmentPlan>,
    pub lab_results: Vec<LabResult>,
    pub appointments: Vec<Appointment>,
    pub medications: Vec<Medication>,
    pub activities: Vec<DailyActivity>,
    pub cognitive_notes: Vec<CognitiveNote>,
}

/// Which report to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// The conversation transcript followed by the cognitive summary.
    Dialog,
    /// Every clinical record section plus the cognitive summary.
    #[default]
    Full,
    /// The day's medication schedule and routine with health notes.
    Health,
}

impl ReportKind {
    fn template(self) -> (&'static str, String) {
        match self {
            ReportKind::Dialog => ("dialog.txt", format!("{DIALOG_HEADER}{SUMMARY_SECTION}")),
            ReportKind::Full => ("full.txt", format!("{FULL_HEADER}{SUMMARY_SECTION}{FOOTER}")),
            ReportKind::Health => ("health.txt", HEALTH_REPORT.to_string()),
        }
    }

    fn file_prefix(self) -> &'static str {
        match self {
            ReportKind::Dialog => "dialogo",
            ReportKind::Full => "relatorio",
            ReportKind::Health => "saude",
        }
    }
}

/// Render a report for `data`, dated `generated_at`.
///
/// Record timestamps are shown in `generated_at`'s time zone.
pub fn render_report(
    data: &ReportData,
    kind: ReportKind,
    generated_at: &Zoned,
) -> Result<String, ExportError> {
    let view = ReportView::new(data, generated_at);
    let (name, template) = kind.template();
    let rendered = render_template(name, &template, &view)?;

    info!(
        kind = ?kind,
        messages = data.messages.len(),
        snapshots = data.snapshots.len(),
        bytes = rendered.len(),
        "report rendered"
    );
    Ok(rendered)
}

/// Download file name for a report, e.g. `relatorio_maria_silva_2026-10-19.txt`.
pub fn report_filename(kind: ReportKind, patient_name: &str, date: jiff::civil::Date) -> String {
    let patient = patient_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_");
    let patient = if patient.is_empty() { "paciente".to_string() } else { patient };
    format!("{}_{}_{}.txt", kind.file_prefix(), patient, date)
}

#[derive(Serialize)]
struct ReportView {
    patient_name: String,
    generated_at: String,
    messages: Vec<MessageView>,
    assessments: Vec<AssessmentView>,
    treatment_plans: Vec<TreatmentView>,
    lab_results: Vec<LabResultView>,
    appointments: Vec<AppointmentView>,
    medications: Vec<MedicationView>,
    activities: Vec<ActivityView>,
    notes: Vec<NoteView>,
    summary: Option<SummaryView>,
    health: HealthView,
}

impl ReportView {
    fn new(data: &ReportData, generated_at: &Zoned) -> Self {
        let tz = generated_at.time_zone().clone();
        let stamp = |ts: jiff::Timestamp| local(ts, &tz);

        Self {
            patient_name: data.patient_name.clone(),
            generated_at: generated_at.strftime(DATE_TIME_FORMAT).to_string(),
            messages: data
                .messages
                .iter()
                .map(|m| MessageView {
                    timestamp: stamp(m.timestamp),
                    speaker: match m.speaker {
                        Speaker::Patient => "Paciente",
                        Speaker::Tutor => "Assistente",
                    },
                    text: m.text.clone(),
                })
                .collect(),
            assessments: data.assessments.iter().map(AssessmentView::new).collect(),
            treatment_plans: data.treatment_plans.iter().map(TreatmentView::new).collect(),
            lab_results: data
                .lab_results
                .iter()
                .map(|r| LabResultView {
                    kind: r.kind.clone(),
                    date: date(r.date),
                    doctor: r.doctor.clone(),
                    result: r.result.clone().unwrap_or_else(|| NOT_INFORMED.to_string()),
                    attachment_url: r.attachment_url.clone(),
                })
                .collect(),
            appointments: data
                .appointments
                .iter()
                .map(|a| AppointmentView {
                    kind: a.kind.clone(),
                    date: date(a.date),
                    time: a.time.clone(),
                    doctor: a.doctor.clone(),
                    room: a.room.clone(),
                    status: labels::appointment_status(a.status),
                    notes: a.notes.clone(),
                })
                .collect(),
            medications: data
                .medications
                .iter()
                .map(|m| MedicationView {
                    name: m.name.clone(),
                    dosage: m.dosage.clone(),
                    frequency: m.frequency.clone(),
                    times: m.time_of_day.join(", "),
                    instructions: m.instructions.clone(),
                    last_taken: m.last_taken.map(stamp),
                    next_due: m.next_due.map(stamp),
                })
                .collect(),
            activities: data
                .activities
                .iter()
                .map(|a| ActivityView {
                    name: a.name.clone(),
                    kind: labels::activity(a.kind),
                    importance: labels::importance(a.importance),
                    status: labels::completion(a.completed),
                    completed_at: a.time_completed.map(stamp),
                    notes: a.notes.clone(),
                })
                .collect(),
            notes: data
                .cognitive_notes
                .iter()
                .map(|n| NoteView {
                    timestamp: stamp(n.timestamp),
                    content: n.content.clone(),
                    tags: n.tags.join(", "),
                })
                .collect(),
            summary: CognitiveSummary::from_snapshots(&data.snapshots).map(SummaryView::from),
            health: HealthView::new(data, generated_at.timestamp(), &tz),
        }
    }
}

#[derive(Serialize)]
struct MessageView {
    timestamp: String,
    speaker: &'static str,
    text: String,
}

#[derive(Serialize)]
struct AssessmentView {
    date: String,
    consciousness: &'static str,
    glasgow: u8,
    pupil_response: &'static str,
    orientation: u8,
    memory: u8,
    attention: u8,
    language: u8,
    executive_function: u8,
    strength: u8,
    coordination: &'static str,
    gait: &'static str,
    blood_pressure: String,
    heart_rate: u16,
    temperature: String,
    respiratory_rate: u16,
    oxygen_saturation: u8,
    symptoms: Vec<String>,
    recommendations: Vec<String>,
}

impl AssessmentView {
    fn new(a: &NeurologicalAssessment) -> Self {
        Self {
            date: date(a.date),
            consciousness: labels::consciousness(a.consciousness.level),
            glasgow: a.consciousness.glasgow_score,
            pupil_response: labels::pupil_response(a.consciousness.pupil_response),
            orientation: a.cognitive_status.orientation,
            memory: a.cognitive_status.memory,
            attention: a.cognitive_status.attention,
            language: a.cognitive_status.language,
            executive_function: a.cognitive_status.executive_function,
            strength: a.motor_function.strength,
            coordination: labels::coordination(a.motor_function.coordination),
            gait: labels::gait(a.motor_function.gait),
            blood_pressure: a.vital_signs.blood_pressure.clone(),
            heart_rate: a.vital_signs.heart_rate,
            temperature: format!("{:.1}", a.vital_signs.temperature),
            respiratory_rate: a.vital_signs.respiratory_rate,
            oxygen_saturation: a.vital_signs.oxygen_saturation,
            symptoms: a.symptoms.clone(),
            recommendations: a.recommendations.clone(),
        }
    }
}

#[derive(Serialize)]
struct TreatmentView {
    start_date: String,
    end_date: Option<String>,
    diagnosis: String,
    physician: String,
    medications: Vec<PrescriptionView>,
    therapies: Vec<TherapyView>,
    emergency_protocol: String,
}

impl TreatmentView {
    fn new(plan: &TreatmentPlan) -> Self {
        Self {
            start_date: date(plan.start_date),
            end_date: plan.end_date.map(date),
            diagnosis: plan.diagnosis.clone(),
            physician: plan.primary_physician.clone(),
            medications: plan
                .medications
                .iter()
                .map(|m| PrescriptionView {
                    name: m.name.clone(),
                    dosage: m.dosage.clone(),
                    frequency: m.frequency.clone(),
                    route: m.route.clone(),
                    duration: m.duration.clone(),
                })
                .collect(),
            therapies: plan
                .therapies
                .iter()
                .map(|t| TherapyView {
                    kind: labels::therapy(t.kind),
                    frequency: t.frequency.clone(),
                    duration: t.duration.clone(),
                    goals: t.goals.join(", "),
                })
                .collect(),
            emergency_protocol: plan.emergency_protocol.clone(),
        }
    }
}

#[derive(Serialize)]
struct PrescriptionView {
    name: String,
    dosage: String,
    frequency: String,
    route: String,
    duration: String,
}

#[derive(Serialize)]
struct TherapyView {
    kind: &'static str,
    frequency: String,
    duration: String,
    goals: String,
}

#[derive(Serialize)]
struct LabResultView {
    kind: String,
    date: String,
    doctor: String,
    result: String,
    attachment_url: Option<String>,
}

#[derive(Serialize)]
struct AppointmentView {
    kind: String,
    date: String,
    time: String,
    doctor: String,
    room: String,
    status: &'static str,
    notes: Option<String>,
}

#[derive(Serialize)]
struct MedicationView {
    name: String,
    dosage: String,
    frequency: String,
    times: String,
    instructions: String,
    last_taken: Option<String>,
    next_due: Option<String>,
}

#[derive(Serialize)]
struct ActivityView {
    name: String,
    kind: &'static str,
    importance: &'static str,
    status: &'static str,
    completed_at: Option<String>,
    notes: Option<String>,
}

#[derive(Serialize)]
struct NoteView {
    timestamp: String,
    content: String,
    tags: String,
}

#[derive(Serialize)]
struct SummaryView {
    sessions: usize,
    cognitive_score: String,
    temporal_orientation: String,
    speech_coherence: String,
    memory_consistency: String,
    emotional_state: String,
    risk_level: String,
    activity_level: String,
    trend: String,
    concerns: Vec<String>,
    recommendations: String,
    overall_assessment: String,
    next_steps: String,
}

impl From<CognitiveSummary> for SummaryView {
    fn from(s: CognitiveSummary) -> Self {
        let scored = |v: f64| format!("{v:.1}/10");
        Self {
            sessions: s.sessions,
            cognitive_score: scored(s.cognitive_score),
            temporal_orientation: scored(s.temporal_orientation),
            speech_coherence: scored(s.speech_coherence),
            memory_consistency: scored(s.memory_consistency),
            emotional_state: s.emotional_state,
            risk_level: s.risk_level,
            activity_level: s.activity_level,
            trend: s.trend,
            concerns: s.concerns,
            recommendations: format!("{}.", s.recommendations.join("; ")),
            overall_assessment: s.overall_assessment,
            next_steps: s.next_steps,
        }
    }
}

#[derive(Serialize)]
struct HealthView {
    total_medications: usize,
    overdue_count: usize,
    overdue: String,
    total_activities: usize,
    completed_activities: usize,
    completion_rate: String,
    top_activity_types: String,
    recommendations: Vec<String>,
    schedule: Vec<DoseView>,
    routine: Vec<RoutineView>,
}

impl HealthView {
    fn new(data: &ReportData, now: jiff::Timestamp, tz: &TimeZone) -> Self {
        let summary = HealthSummary::new(&data.medications, &data.activities, now);
        let routine = completed_activities(&data.activities)
            .into_iter()
            .chain(pending_activities(&data.activities))
            .map(|a| RoutineView {
                name: a.name.clone(),
                kind: labels::activity(a.kind),
                scheduled_time: a.scheduled_time.clone(),
                status: labels::completion(a.completed),
            })
            .collect();

        Self {
            total_medications: summary.total_medications,
            overdue_count: summary.overdue_medications.len(),
            overdue: summary.overdue_medications.join(", "),
            total_activities: summary.total_activities,
            completed_activities: summary.completed_activities,
            completion_rate: format!("{:.1}%", summary.completion_rate),
            top_activity_types: summary.top_activity_types.join(", "),
            recommendations: summary.recommendations,
            schedule: medication_schedule(&data.medications)
                .into_iter()
                .map(|m| DoseView {
                    name: m.name.clone(),
                    dosage: m.dosage.clone(),
                    next_due: m
                        .next_due
                        .map(|ts| local(ts, tz))
                        .unwrap_or_else(|| "Sem horário".to_string()),
                    overdue: m.is_overdue(now),
                })
                .collect(),
            routine,
        }
    }
}

#[derive(Serialize)]
struct DoseView {
    name: String,
    dosage: String,
    next_due: String,
    overdue: bool,
}

#[derive(Serialize)]
struct RoutineView {
    name: String,
    kind: &'static str,
    scheduled_time: Option<String>,
    status: &'static str,
}

fn local(ts: jiff::Timestamp, tz: &TimeZone) -> String {
    ts.to_zoned(tz.clone()).strftime(DATE_TIME_FORMAT).to_string()
}

fn date(d: jiff::civil::Date) -> String {
    d.strftime(DATE_FORMAT).to_string()
}

const SUMMARY_SECTION: &str = r#"
{%- if summary %}
Sessões analisadas: {{ summary.sessions }}

1. Pontuação Cognitiva
   - Pontuação global: {{ summary.cognitive_score }}
   - Orientação Temporal: {{ summary.temporal_orientation }}
   - Coerência do Discurso: {{ summary.speech_coherence }}
   - Consistência da Memória: {{ summary.memory_consistency }}
   - Tendência: {{ summary.trend }}

2. Estado Emocional
   - Avaliação: {{ summary.emotional_state }}
   - Nível de risco: {{ summary.risk_level }}

3. Nível de Atividade
   - Avaliação: {{ summary.activity_level }}

4. Preocupações Identificadas:
{%- if summary.concerns | length == 0 %}
   - Nenhuma preocupação significativa identificada
{%- endif %}
{%- for c in summary.concerns %}
   - {{ c }}
{%- endfor %}

5. Recomendações:
   - {{ summary.recommendations }}

6. Observações Adicionais:
   - Estado geral: {{ summary.overall_assessment }}
   - Próximos passos: {{ summary.next_steps }}
{%- else %}
Sem análises registadas.
{%- endif %}
{%- for n in notes %}

[{{ n.timestamp }}] {{ n.content }}
{%- if n.tags %}
Etiquetas: {{ n.tags }}
{%- endif %}
{%- endfor %}
"#;

const DIALOG_HEADER: &str = r#"Relatório de Diálogo - Paciente: {{ patient_name }}
Data: {{ generated_at }}
----------------------------------------
{%- for m in messages %}

[{{ m.timestamp }}] {{ m.speaker }}: {{ m.text }}
{%- endfor %}

Notas de Análise Cognitiva:
----------------------------------------"#;

const FULL_HEADER: &str = r#"RELATÓRIO COMPLETO DE AVALIAÇÃO - ALZHEIMER
==========================================
Paciente: {{ patient_name }}
Data do Relatório: {{ generated_at }}
==========================================

1. DIÁLOGO COM ASSISTENTE
-------------------------
{%- if messages | length == 0 %}
Sem registos.
{%- endif %}
{%- for m in messages %}
[{{ m.timestamp }}] {{ m.speaker }}: {{ m.text }}
{%- endfor %}

2. AVALIAÇÕES NEUROLÓGICAS
--------------------------
{%- if assessments | length == 0 %}
Sem registos.
{%- endif %}
{%- for a in assessments %}
{%- if not loop.first %}
---
{%- endif %}
Data: {{ a.date }}

Consciência:
- Nível: {{ a.consciousness }}
- Glasgow: {{ a.glasgow }}/15
- Resposta Pupilar: {{ a.pupil_response }}

Status Cognitivo:
- Orientação: {{ a.orientation }}/10
- Memória: {{ a.memory }}/10
- Atenção: {{ a.attention }}/10
- Linguagem: {{ a.language }}/10
- Função Executiva: {{ a.executive_function }}/10

Função Motora:
- Força: {{ a.strength }}/5
- Coordenação: {{ a.coordination }}
- Marcha: {{ a.gait }}

Sinais Vitais:
- Pressão Arterial: {{ a.blood_pressure }}
- Freq. Cardíaca: {{ a.heart_rate }} bpm
- Temperatura: {{ a.temperature }}°C
- Freq. Respiratória: {{ a.respiratory_rate }}
- Saturação O₂: {{ a.oxygen_saturation }}%
{%- if a.symptoms | length > 0 %}

Sintomas:
{%- for s in a.symptoms %}
- {{ s }}
{%- endfor %}
{%- endif %}
{%- if a.recommendations | length > 0 %}

Recomendações:
{%- for r in a.recommendations %}
- {{ r }}
{%- endfor %}
{%- endif %}
{%- endfor %}

3. PLANOS DE TRATAMENTO
-----------------------
{%- if treatment_plans | length == 0 %}
Sem registos.
{%- endif %}
{%- for p in treatment_plans %}
{%- if not loop.first %}
---
{%- endif %}
Data Início: {{ p.start_date }}
{%- if p.end_date %}
Data Fim: {{ p.end_date }}
{%- endif %}
Diagnóstico: {{ p.diagnosis }}
Médico: {{ p.physician }}
{%- if p.medications | length > 0 %}

Medicações:
{%- for m in p.medications %}
- {{ m.name }} ({{ m.dosage }})
   Frequência: {{ m.frequency }}
   Via: {{ m.route }}
   Duração: {{ m.duration }}
{%- endfor %}
{%- endif %}
{%- if p.therapies | length > 0 %}

Terapias:
{%- for t in p.therapies %}
- {{ t.kind }}: {{ t.frequency }} ({{ t.duration }})
   Objetivos: {{ t.goals }}
{%- endfor %}
{%- endif %}
{%- if p.emergency_protocol %}

Protocolo de Emergência:
{{ p.emergency_protocol }}
{%- endif %}
{%- endfor %}

4. EXAMES
---------
{%- if lab_results | length == 0 %}
Sem registos.
{%- endif %}
{%- for r in lab_results %}
{%- if not loop.first %}
---
{%- endif %}
Tipo: {{ r.kind }}
Data: {{ r.date }}
Médico: {{ r.doctor }}
Resultado: {{ r.result }}
{%- if r.attachment_url %}
Anexo: {{ r.attachment_url }}
{%- endif %}
{%- endfor %}

5. CONSULTAS
------------
{%- if appointments | length == 0 %}
Sem registos.
{%- endif %}
{%- for a in appointments %}
{%- if not loop.first %}
---
{%- endif %}
Tipo: {{ a.kind }}
Data: {{ a.date }} às {{ a.time }}
Médico: {{ a.doctor }}
Sala: {{ a.room }}
Status: {{ a.status }}
{%- if a.notes %}
Observações: {{ a.notes }}
{%- endif %}
{%- endfor %}

6. MEDICAÇÕES ATUAIS
--------------------
{%- if medications | length == 0 %}
Sem registos.
{%- endif %}
{%- for m in medications %}
{%- if not loop.first %}
---
{%- endif %}
Nome: {{ m.name }}
Dosagem: {{ m.dosage }}
Frequência: {{ m.frequency }}
Horários: {{ m.times }}
Instruções: {{ m.instructions }}
{%- if m.last_taken %}
Última dose: {{ m.last_taken }}
{%- endif %}
{%- if m.next_due %}
Próxima dose: {{ m.next_due }}
{%- endif %}
{%- endfor %}

7. ATIVIDADES DIÁRIAS
---------------------
{%- if activities | length == 0 %}
Sem registos.
{%- endif %}
{%- for a in activities %}
{%- if not loop.first %}
---
{%- endif %}
Atividade: {{ a.name }}
Tipo: {{ a.kind }}
Importância: {{ a.importance }}
Status: {{ a.status }}
{%- if a.completed_at %}
Concluída em: {{ a.completed_at }}
{%- endif %}
{%- if a.notes %}
Observações: {{ a.notes }}
{%- endif %}
{%- endfor %}

8. NOTAS DE ANÁLISE COGNITIVA
-----------------------------"#;

const FOOTER: &str = r#"
==========================================
Relatório gerado automaticamente pelo Sistema de Avaliação Neurológica do Alzheimer
"#;

const HEALTH_REPORT: &str = r#"Relatório Diário de Saúde
Paciente: {{ patient_name }}
Data: {{ generated_at }}

Medicações:
- Total prescrito: {{ health.total_medications }}
- Medicações atrasadas: {{ health.overdue_count }}
{%- if health.overdue_count > 0 %}
- Atenção para: {{ health.overdue }}
{%- endif %}
{%- for m in health.schedule %}
{%- if loop.first %}

Horário:
{%- endif %}
- {{ m.next_due }} {{ m.name }} ({{ m.dosage }}){% if m.overdue %} [atrasada]{% endif %}
{%- endfor %}

Atividades:
- Total planeado: {{ health.total_activities }}
- Completadas: {{ health.completed_activities }} ({{ health.completion_rate }})
- Tipos mais frequentes: {{ health.top_activity_types }}
{%- for a in health.routine %}
{%- if loop.first %}

Rotina:
{%- endif %}
- {% if a.scheduled_time %}{{ a.scheduled_time }} {% endif %}{{ a.name }} ({{ a.kind }}): {{ a.status }}
{%- endfor %}
{%- if health.recommendations | length > 0 %}

Recomendações:
{%- for r in health.recommendations %}
- {{ r }}
{%- endfor %}
{%- endif %}
"#;
