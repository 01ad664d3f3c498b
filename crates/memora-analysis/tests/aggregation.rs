use memora_analysis::policies::simple::Simple;
use memora_analysis::policies::weighted::Weighted;
use memora_analysis::scoring::SpeechWeights;
use memora_analysis::{all_policies, get_policy, AggregationPolicy, DEFAULT_POLICY};
use memora_core::models::risk::RiskLevel;
use memora_core::models::signal::SignalSet;

#[test]
fn registry_lists_both_policies() {
    let ids: Vec<String> = all_policies().iter().map(|p| p.id().to_string()).collect();
    assert_eq!(ids, vec!["weighted", "simple"]);
    assert_eq!(DEFAULT_POLICY, "weighted");
    assert!(get_policy("simple").is_some());
    assert!(get_policy("median").is_none());
}

#[test]
fn uniform_scores_map_to_risk_levels() {
    for policy in all_policies() {
        let cases = [(0.71, RiskLevel::Low), (0.5, RiskLevel::Moderate), (0.1, RiskLevel::High)];
        for (score, expected) in cases {
            let aggregate = policy.aggregate(&SignalSet::uniform(score)).unwrap();
            assert_eq!(aggregate.risk_level, expected, "{} at {score}", policy.id());
        }
    }
}

#[test]
fn risk_thresholds_are_inclusive() {
    assert_eq!(RiskLevel::from_average(0.7), RiskLevel::Low);
    assert_eq!(RiskLevel::from_average(0.4), RiskLevel::Moderate);
    assert_eq!(RiskLevel::from_average(0.39), RiskLevel::High);
}

#[test]
fn temporal_disorientation_is_the_only_concern() {
    let mut signals = SignalSet::uniform(0.8);
    signals.temporal_orientation = 0.2;

    let aggregate = Weighted::default().aggregate(&signals).unwrap();
    assert_eq!(aggregate.concerns, vec!["Time disorientation detected"]);
}

#[test]
fn concerns_follow_fixed_order() {
    let mut signals = SignalSet::uniform(0.9);
    signals.memory_consistency = 0.1;
    signals.coherence = 0.1;
    signals.behavior.agitation = 0.9;

    let aggregate = Simple.aggregate(&signals).unwrap();
    assert_eq!(
        aggregate.concerns,
        vec![
            "Speech coherence issues detected",
            "Memory inconsistencies detected",
            "Signs of agitation detected",
        ]
    );
}

#[test]
fn recommendations_are_deduplicated() {
    let mut signals = SignalSet::uniform(0.9);
    signals.coherence = 0.55;
    signals.fluency = 0.2;
    signals.behavior.confusion = 0.8;

    let aggregate = Weighted::default().aggregate(&signals).unwrap();
    assert_eq!(
        aggregate.recommendations,
        vec![
            "Exercícios de construção de narrativas",
            "Implementar rotinas diárias estruturadas",
        ]
    );
}

#[test]
fn healthy_signals_produce_no_findings() {
    let aggregate = Weighted::default().aggregate(&SignalSet::uniform(1.0)).unwrap();
    assert!(aggregate.concerns.is_empty());
    assert!(aggregate.recommendations.is_empty());
    assert_eq!(aggregate.risk_level, RiskLevel::Low);
}

#[test]
fn weighted_composite_uses_speech_weights() {
    let mut signals = SignalSet::uniform(0.0);
    signals.coherence = 1.0;

    let default = Weighted::default().composite(&signals);
    assert!((default - 0.3).abs() < 1e-9);

    let coherence_only = Weighted::new(SpeechWeights {
        coherence: 2.0,
        fluency: 0.0,
        vocabulary: 0.0,
        repetition: 0.0,
    });
    assert!((coherence_only.composite(&signals) - 1.0).abs() < 1e-9);
}

#[test]
fn simple_composite_is_mean_of_three() {
    let mut signals = SignalSet::uniform(0.0);
    signals.temporal_orientation = 0.9;
    signals.coherence = 0.6;
    signals.memory_consistency = 0.3;

    let aggregate = Simple.aggregate(&signals).unwrap();
    assert!((aggregate.composite_score - 0.6).abs() < 1e-9);
    assert!((aggregate.average - 0.6).abs() < 1e-9);
}

#[test]
fn non_finite_composite_is_a_failure() {
    let mut signals = SignalSet::uniform(0.5);
    signals.coherence = f64::NAN;
    assert!(Weighted::default().aggregate(&signals).is_err());
}
