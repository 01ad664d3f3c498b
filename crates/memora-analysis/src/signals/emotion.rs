use memora_core::models::signal::{EmotionKind, EmotionalState};

use super::unit;
use crate::lexicon::Lexicon;
use crate::normalize::Normalized;

/// Keyword vote across the emotional categories.
///
/// The category with strictly the most distinct lexicon hits wins. No hits,
/// or a tie for first place, yields [`EmotionKind::Neutral`]. Confidence is
/// `min(winning count / 2, 1)`.
pub fn emotional_state(text: &Normalized, lexicon: &Lexicon) -> EmotionalState {
    let votes = [
        (EmotionKind::Positive, text.count_matches(&lexicon.positive)),
        (EmotionKind::Negative, text.count_matches(&lexicon.negative)),
        (EmotionKind::Neutral, text.count_matches(&lexicon.neutral)),
        (EmotionKind::Confused, text.count_matches(&lexicon.confused)),
        (EmotionKind::Fatigued, text.count_matches(&lexicon.fatigued)),
    ];

    let top = votes.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let mut leaders = votes.iter().filter(|(_, count)| *count == top);

    let primary = match (leaders.next(), leaders.next()) {
        (Some((kind, _)), None) if top > 0 => *kind,
        _ => EmotionKind::Neutral,
    };

    EmotionalState {
        primary,
        confidence: unit(top as f64 / 2.0),
    }
}
