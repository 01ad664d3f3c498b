use jiff::civil::Weekday;

use super::{saturating_ratio, unit};
use crate::lexicon::{weekday_names, Lexicon};
use crate::normalize::Normalized;

/// Deducted when the text contains no temporal marker at all.
pub const MISSING_MARKER_PENALTY: f64 = 0.3;

/// Deducted when the text talks about "the day" without naming today.
pub const WRONG_WEEKDAY_PENALTY: f64 = 0.3;

/// Number of distinct spatial markers that saturates the spatial score.
pub const SPATIAL_SATURATION: f64 = 3.0;

/// Temporal orientation in [0, 1].
///
/// Starts at 1. Loses [`MISSING_MARKER_PENALTY`] when no temporal marker is
/// present, and [`WRONG_WEEKDAY_PENALTY`] when a day word appears but
/// `today`'s name (Portuguese or English) does not. Adding marker
/// occurrences can only keep or raise the score.
pub fn temporal_orientation(text: &Normalized, lexicon: &Lexicon, today: Weekday) -> f64 {
    let mut score = 1.0;

    if text.count_matches(&lexicon.temporal_markers) == 0 {
        score -= MISSING_MARKER_PENALTY;
    }

    let mentions_day = lexicon.day_words.iter().any(|w| text.contains_token(w));
    if mentions_day {
        let lowered = text.lowered();
        let names_today = weekday_names(today)
            .iter()
            .any(|name| lowered.contains(name));
        if !names_today {
            score -= WRONG_WEEKDAY_PENALTY;
        }
    }

    unit(score)
}

/// Spatial orientation: `min(distinct spatial markers / 3, 1)`.
pub fn spatial_orientation(text: &Normalized, lexicon: &Lexicon) -> f64 {
    saturating_ratio(text.count_matches(&lexicon.spatial_markers), SPATIAL_SATURATION)
}
