use std::sync::Arc;

use jiff::tz::TimeZone;
use memora_analysis::clock::FixedClock;
use memora_analysis::config::AnalyzerConfig;
use memora_analysis::conversation::ConversationAnalyzer;
use memora_chat::context::{build_analysis_block, contextualize, SYSTEM_PROMPT};
use memora_core::models::snapshot::MetricSnapshot;

fn snapshot_of(text: &str) -> MetricSnapshot {
    let now = jiff::civil::date(2026, 10, 19)
        .at(10, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap();
    ConversationAnalyzer::new(AnalyzerConfig::default())
        .unwrap()
        .with_clock(Arc::new(FixedClock::new(now)))
        .analyze_interaction(text)
        .unwrap()
}

#[test]
fn block_reports_emotion_risk_and_percentages() {
    let block = build_analysis_block(&snapshot_of("Estou muito feliz e contente hoje"));

    assert!(block.starts_with("<analise_atual>"));
    assert!(block.ends_with("</analise_atual>"));
    assert!(block.contains("- Estado emocional: positive (100% confiança)"));
    assert!(block.contains("- Nível de risco: low"));
    assert!(block.contains("- Orientação temporal: 100%"));
    assert!(block.contains("- Coerência: 100%"));
}

#[test]
fn percentages_are_rounded() {
    let mut snapshot = snapshot_of("Bom dia");
    snapshot.temporal_orientation = 0.404;
    snapshot.speech_patterns.coherence = 0.666;

    let block = build_analysis_block(&snapshot);
    assert!(block.contains("- Orientação temporal: 40%"));
    assert!(block.contains("- Coerência: 67%"));
}

#[test]
fn contextualize_appends_block_after_prompt() {
    let snapshot = snapshot_of("Bom dia");
    let prompt = contextualize(SYSTEM_PROMPT, Some(&snapshot));
    assert!(prompt.starts_with(SYSTEM_PROMPT));
    assert!(prompt.ends_with("</analise_atual>"));
}

#[test]
fn contextualize_without_analysis_is_unchanged() {
    assert_eq!(contextualize(SYSTEM_PROMPT, None), SYSTEM_PROMPT);
}
