use std::sync::Arc;

use jiff::tz::TimeZone;
use memora_analysis::clock::FixedClock;
use memora_analysis::config::AnalyzerConfig;
use memora_analysis::conversation::ConversationAnalyzer;
use memora_chat::exercises::{ExerciseGenerator, ExerciseKind};
use memora_chat::responder::{CannedResponder, ReplyKind, MAX_EXERCISES};
use memora_core::models::risk::RiskLevel;
use memora_core::models::signal::EmotionKind;
use memora_core::models::snapshot::MetricSnapshot;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn snapshot() -> MetricSnapshot {
    let now = jiff::civil::date(2026, 10, 19)
        .at(10, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap();
    ConversationAnalyzer::new(AnalyzerConfig::default())
        .unwrap()
        .with_clock(Arc::new(FixedClock::new(now)))
        .analyze_interaction("Fui ao mercado hoje")
        .unwrap()
}

/// A responder that has already given every exercise it will give.
fn exhausted(seed: u64) -> CannedResponder<StdRng> {
    let mut responder = CannedResponder::new(StdRng::seed_from_u64(seed));
    for _ in 0..60 {
        responder.reply("Fui ao mercado", None);
    }
    responder
}

#[test]
fn high_risk_always_gets_support() {
    let mut high = snapshot();
    high.risk_level = RiskLevel::High;

    let mut responder = CannedResponder::new(StdRng::seed_from_u64(1));
    for _ in 0..20 {
        let reply = responder.reply("Não sei onde estou", Some(&high));
        assert_eq!(reply.kind, ReplyKind::Supportive);
    }
    assert!(responder.exercises_given().is_empty());
}

#[test]
fn at_most_three_exercises_are_given() {
    let mut responder = CannedResponder::new(StdRng::seed_from_u64(42));
    let mut exercises = 0;
    for _ in 0..60 {
        let reply = responder.reply("Fui ao mercado", None);
        if reply.kind == ReplyKind::Exercise {
            exercises += 1;
            let exercise = reply.exercise.unwrap();
            assert!(reply.text.contains(&exercise.question));
            assert!(reply.text.starts_with("Vamos fazer um exercício juntos."));
        }
    }
    assert_eq!(exercises, MAX_EXERCISES);
    assert_eq!(responder.exercises_given().len(), MAX_EXERCISES);
}

#[test]
fn negative_emotion_gets_emotional_support() {
    let mut negative = snapshot();
    negative.emotional_state.primary = EmotionKind::Negative;

    let mut responder = exhausted(5);
    let reply = responder.reply("Estou triste", Some(&negative));
    assert_eq!(reply.kind, ReplyKind::EmotionalSupport);
}

#[test]
fn greeting_matches_whole_words_only() {
    let mut responder = exhausted(9);
    assert_eq!(responder.reply("Olá, bom dia!", None).kind, ReplyKind::Greeting);
    assert_eq!(responder.reply("Ele foi embora", None).kind, ReplyKind::Conversational);
}

#[test]
fn same_seed_same_replies() {
    let mut a = CannedResponder::new(StdRng::seed_from_u64(77));
    let mut b = CannedResponder::new(StdRng::seed_from_u64(77));
    for text in ["Olá", "Fui ao mercado", "Estou cansado", "O que é isto?"] {
        assert_eq!(a.reply(text, None), b.reply(text, None));
    }
}

#[test]
fn exercises_respect_kind_and_difficulty() {
    let mut generator = ExerciseGenerator::new(StdRng::seed_from_u64(0));
    for kind in ExerciseKind::ALL {
        let exercise = generator.generate(Some(kind));
        assert_eq!(exercise.kind, kind);
        assert!((1..=3).contains(&exercise.difficulty));
    }
    for _ in 0..30 {
        assert_eq!(generator.generate_at_most(1).difficulty, 1);
        assert!(generator.generate(None).difficulty <= 3);
    }
}
