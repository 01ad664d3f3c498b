use std::collections::HashSet;

use memora_core::models::signal::BehavioralPattern;

use super::{saturating_ratio, unit};
use crate::lexicon::Lexicon;
use crate::normalize::Normalized;

/// Indicator hits that saturate a behavioral score.
pub const INDICATOR_SATURATION: f64 = 3.0;

pub fn behavioral_pattern(text: &Normalized, lexicon: &Lexicon) -> BehavioralPattern {
    BehavioralPattern {
        repetitive_actions: repetitive_actions(text),
        agitation: saturating_ratio(
            text.count_matches(&lexicon.agitation_indicators),
            INDICATOR_SATURATION,
        ),
        confusion: saturating_ratio(
            text.count_matches(&lexicon.confusion_indicators),
            INDICATOR_SATURATION,
        ),
        social_withdrawal: social_withdrawal(text, lexicon),
    }
}

/// `1 - unique / total` over sentences; 0 with fewer than two sentences.
fn repetitive_actions(text: &Normalized) -> f64 {
    let keys = text.sentence_keys();
    if keys.len() < 2 {
        return 0.0;
    }
    let unique: HashSet<&String> = keys.iter().collect();
    unit(1.0 - unique.len() as f64 / keys.len() as f64)
}

/// Withdrawal hits net of social hits, over three, clamped to [0, 1].
fn social_withdrawal(text: &Normalized, lexicon: &Lexicon) -> f64 {
    let withdrawal = text.count_matches(&lexicon.withdrawal_words) as f64;
    let social = text.count_matches(&lexicon.social_words) as f64;
    unit((withdrawal - social) / INDICATOR_SATURATION)
}
