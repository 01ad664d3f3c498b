//! Cognitive summary over a run of snapshots, on the "/10" scale.

use memora_core::models::snapshot::MetricSnapshot;
use serde::Serialize;

use crate::labels;
use crate::scale::out_of_ten;

/// Presentation score below which a domain earns a recommendation.
const RECOMMENDATION_THRESHOLD: f64 = 7.0;

/// Change in cognitive score, in "/10" points, that counts as a trend.
const TREND_DELTA: f64 = 0.5;

/// Averages and narrative assessments derived from one or more snapshots.
///
/// Scores are already converted to the 0–10 scale; every threshold below
/// is expressed on that scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CognitiveSummary {
    pub sessions: usize,
    pub cognitive_score: f64,
    pub temporal_orientation: f64,
    pub speech_coherence: f64,
    pub memory_consistency: f64,
    pub emotional_state: String,
    pub risk_level: String,
    pub activity_level: String,
    pub trend: String,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub overall_assessment: String,
    pub next_steps: String,
}

impl CognitiveSummary {
    /// Summarize `snapshots` in capture order. `None` when there are none.
    ///
    /// Emotional state, risk level and concerns come from the latest
    /// snapshot; scores are averaged over all of them.
    pub fn from_snapshots(snapshots: &[MetricSnapshot]) -> Option<Self> {
        let (first, latest) = (snapshots.first()?, snapshots.last()?);

        let average = |f: fn(&MetricSnapshot) -> f64| {
            out_of_ten(snapshots.iter().map(f).sum::<f64>() / snapshots.len() as f64)
        };
        let cognitive_score = average(|s| s.cognitive_score);
        let temporal_orientation = average(|s| s.temporal_orientation);
        let speech_coherence = average(|s| s.speech_patterns.coherence);
        let memory_consistency = average(|s| s.memory_consistency);

        let domain_average = (temporal_orientation + speech_coherence + memory_consistency) / 3.0;

        Some(Self {
            sessions: snapshots.len(),
            cognitive_score,
            temporal_orientation,
            speech_coherence,
            memory_consistency,
            emotional_state: labels::emotion(latest.emotional_state.primary).to_string(),
            risk_level: labels::risk(latest.risk_level).to_string(),
            activity_level: activity_level(memory_consistency).to_string(),
            trend: trend(
                out_of_ten(first.cognitive_score),
                out_of_ten(latest.cognitive_score),
                snapshots.len(),
            )
            .to_string(),
            concerns: latest.concerns.clone(),
            recommendations: recommendations(
                temporal_orientation,
                speech_coherence,
                memory_consistency,
            ),
            overall_assessment: overall_assessment(domain_average).to_string(),
            next_steps: next_steps(latest.concerns.len(), domain_average).to_string(),
        })
    }
}

fn activity_level(memory: f64) -> &'static str {
    if memory >= 8.0 {
        "Alto - Boa participação e engajamento"
    } else if memory >= 5.0 {
        "Normal - Participação adequada"
    } else {
        "Baixo - Necessita maior estímulo"
    }
}

fn trend(first: f64, latest: f64, sessions: usize) -> &'static str {
    if sessions < 2 {
        return "Sessão única";
    }
    let delta = latest - first;
    if delta >= TREND_DELTA {
        "Em melhoria"
    } else if delta <= -TREND_DELTA {
        "Em declínio"
    } else {
        "Estável"
    }
}

fn recommendations(temporal: f64, coherence: f64, memory: f64) -> Vec<String> {
    let mut out = Vec::new();
    if temporal < RECOMMENDATION_THRESHOLD {
        out.push("Reforçar exercícios de orientação temporal".to_string());
    }
    if coherence < RECOMMENDATION_THRESHOLD {
        out.push("Estimular conversação estruturada".to_string());
    }
    if memory < RECOMMENDATION_THRESHOLD {
        out.push("Aumentar atividades de memória".to_string());
    }
    if out.is_empty() {
        out.push("Manter rotina atual de atividades".to_string());
    }
    out
}

fn overall_assessment(average: f64) -> &'static str {
    if average >= 8.0 {
        "Excelente progresso"
    } else if average >= 6.0 {
        "Progresso satisfatório"
    } else if average >= 4.0 {
        "Necessita atenção moderada"
    } else {
        "Requer atenção especial"
    }
}

fn next_steps(concerns: usize, average: f64) -> &'static str {
    if concerns > 2 || average < 4.0 {
        "Agendar avaliação detalhada com equipa multidisciplinar"
    } else if concerns > 0 || average < 6.0 {
        "Aumentar frequência de sessões de estimulação cognitiva"
    } else {
        "Manter programa atual com monitorização regular"
    }
}
