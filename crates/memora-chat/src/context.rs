//! System prompt for the tutor, and the analysis block folded into it.
//!
//! The block gives the model the patient's current emotional state, risk
//! level, temporal orientation and coherence so it can adjust its tone.

use memora_core::models::snapshot::MetricSnapshot;

pub const SYSTEM_PROMPT: &str = "\
Você é uma tutora virtual especializada em ajudar pessoas com Alzheimer, usando português de Portugal.

DIRETRIZES:
1. Use sempre português de Portugal
2. Dê respostas únicas e diretas, sem repetir a pergunta
3. Limite as respostas a 1-2 frases curtas
4. Use um tom calmo e reconfortante
5. Use vocabulário simples e familiar
6. Evite corrigir o paciente diretamente
7. Foque na orientação temporal e espacial
8. Priorize a segurança e o bem-estar

EXEMPLOS:
Paciente confuso: \"Está tudo bem, vamos conversar com calma.\"
Paciente agitado: \"Respire fundo comigo, encontraremos a solução juntos.\"
Paciente desorientado: \"Estamos num lugar seguro, pode ficar tranquilo.\"";

/// Whole-number percentage of a 0–1 score.
fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Build the analysis block for a snapshot.
pub fn build_analysis_block(snapshot: &MetricSnapshot) -> String {
    format!(
        "<analise_atual>\n\
         - Estado emocional: {} ({}% confiança)\n\
         - Nível de risco: {}\n\
         - Orientação temporal: {}%\n\
         - Coerência: {}%\n\
         </analise_atual>",
        snapshot.emotional_state.primary,
        percent(snapshot.emotional_state.confidence),
        snapshot.risk_level,
        percent(snapshot.temporal_orientation),
        percent(snapshot.speech_patterns.coherence),
    )
}

/// `system_prompt` with the analysis block appended. Without a snapshot the
/// prompt is returned unchanged.
pub fn contextualize(system_prompt: &str, analysis: Option<&MetricSnapshot>) -> String {
    match analysis {
        Some(snapshot) => format!("{system_prompt}\n\n{}", build_analysis_block(snapshot)),
        None => system_prompt.to_string(),
    }
}
