use std::sync::Arc;

use jiff::civil::Weekday;
use jiff::tz::TimeZone;
use memora_analysis::clock::FixedClock;
use memora_analysis::config::AnalyzerConfig;
use memora_analysis::conversation::ConversationAnalyzer;
use memora_analysis::lexicon::Lexicon;
use memora_analysis::normalize::normalize;
use memora_analysis::signals::{behavior, emotion, language, orientation, speech};
use memora_core::models::snapshot::MetricSnapshot;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORDS: &[&str] = &[
    "eu", "fui", "ao", "mercado", "hoje", "ontem", "dia", "segunda", "não", "sei", "hum", "...",
    "feliz", "triste", "cansado", "sozinho", "família", "casa", "cozinha", "should of", "nervoso",
    "where am i", "today", "tired", "我", "今天", "مرحبا", "Привет", "🙂", "—", "?!", "…", "\t",
];

fn random_text(rng: &mut StdRng) -> String {
    match rng.gen_range(0..10) {
        0 => String::new(),
        1 => " ".repeat(rng.gen_range(1..20)),
        2 => {
            let len = rng.gen_range(2_000..9_000);
            (0..len)
                .map(|_| char::from_u32(rng.gen_range(0x20..0x3000)).unwrap_or('?'))
                .collect()
        }
        _ => {
            let count = rng.gen_range(1..40);
            let mut text = String::new();
            for _ in 0..count {
                text.push_str(WORDS[rng.gen_range(0..WORDS.len())]);
                text.push(if rng.gen_bool(0.2) { '.' } else { ' ' });
            }
            text
        }
    }
}

fn assert_bounded(snapshot: &MetricSnapshot, input: &str) {
    let scores = [
        snapshot.cognitive_score,
        snapshot.temporal_orientation,
        snapshot.spatial_orientation,
        snapshot.short_term_memory,
        snapshot.long_term_memory,
        snapshot.memory_consistency,
        snapshot.emotional_state.confidence,
        snapshot.speech_patterns.coherence,
        snapshot.speech_patterns.fluency,
        snapshot.speech_patterns.vocabulary,
        snapshot.speech_patterns.repetition,
        snapshot.language.complexity,
        snapshot.language.grammar_accuracy,
        snapshot.behavior.repetitive_actions,
        snapshot.behavior.agitation,
        snapshot.behavior.confusion,
        snapshot.behavior.social_withdrawal,
    ];
    for score in scores {
        assert!(
            (0.0..=1.0).contains(&score),
            "score {score} out of bounds for input {input:?}"
        );
    }
}

#[test]
fn every_score_stays_in_unit_interval() {
    let now = jiff::civil::date(2026, 10, 19)
        .at(10, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap();
    let mut analyzer = ConversationAnalyzer::new(AnalyzerConfig::default())
        .unwrap()
        .with_clock(Arc::new(FixedClock::new(now)));
    let mut rng = StdRng::seed_from_u64(0x6d656d6f7261);

    for _ in 0..1000 {
        let text = random_text(&mut rng);
        let snapshot = analyzer.analyze_interaction(&text).unwrap();
        assert_bounded(&snapshot, &text);
        let mut unique = snapshot.recommendations.clone();
        unique.dedup();
        assert_eq!(unique.len(), snapshot.recommendations.len());
    }

    assert_eq!(analyzer.history().samples().len(), 1000);
    assert_eq!(analyzer.history().snapshots().len(), 1000);
}

#[test]
fn stateless_analyzers_are_idempotent() {
    let lexicon = Lexicon::default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let text = random_text(&mut rng);
        let a = normalize(&text);
        let b = normalize(&text);
        assert_eq!(a, b);

        assert_eq!(
            orientation::temporal_orientation(&a, &lexicon, Weekday::Monday),
            orientation::temporal_orientation(&b, &lexicon, Weekday::Monday)
        );
        assert_eq!(
            orientation::spatial_orientation(&a, &lexicon),
            orientation::spatial_orientation(&b, &lexicon)
        );
        assert_eq!(speech::coherence(&a, &lexicon), speech::coherence(&b, &lexicon));
        assert_eq!(speech::fluency(&a, &lexicon), speech::fluency(&b, &lexicon));
        assert_eq!(speech::vocabulary(&a), speech::vocabulary(&b));
        assert_eq!(language::complexity(&a), language::complexity(&b));
        assert_eq!(
            language::grammar_accuracy(&a, &lexicon),
            language::grammar_accuracy(&b, &lexicon)
        );
        assert_eq!(
            emotion::emotional_state(&a, &lexicon),
            emotion::emotional_state(&b, &lexicon)
        );
        assert_eq!(
            behavior::behavioral_pattern(&a, &lexicon),
            behavior::behavioral_pattern(&b, &lexicon)
        );
    }
}

#[test]
fn adding_temporal_markers_never_lowers_orientation() {
    let lexicon = Lexicon::default();
    let mut rng = StdRng::seed_from_u64(11);
    let markers = ["hoje", "ontem", "segunda", "today", "monday", "manhã", "semana"];

    for _ in 0..200 {
        let base = random_text(&mut rng);
        let before =
            orientation::temporal_orientation(&normalize(&base), &lexicon, Weekday::Monday);

        let marker = markers[rng.gen_range(0..markers.len())];
        let extended = format!("{base} {marker}");
        let after =
            orientation::temporal_orientation(&normalize(&extended), &lexicon, Weekday::Monday);

        assert!(after >= before, "{before} -> {after} adding {marker:?} to {base:?}");
    }
}
