use std::collections::HashSet;

use super::unit;
use crate::lexicon::Lexicon;
use crate::normalize::Normalized;

/// Tokens this short are function words and never count as repeated.
const MIN_REPEATED_TOKEN_CHARS: usize = 4;

/// Fraction of sentences with a minimal subject–predicate shape: at least
/// two tokens, one of which looks like a verb. Zero sentences score 0.
pub fn coherence(text: &Normalized, lexicon: &Lexicon) -> f64 {
    let sentences = text.sentence_tokens();
    if sentences.is_empty() {
        return 0.0;
    }

    let structured = sentences
        .iter()
        .filter(|tokens| tokens.len() >= 2 && tokens.iter().any(|t| lexicon.is_verb(t)))
        .count();

    unit(structured as f64 / sentences.len() as f64)
}

/// `1 - hesitations / words`, floored at 0. Empty text is fully fluent.
pub fn fluency(text: &Normalized, lexicon: &Lexicon) -> f64 {
    if text.words.is_empty() {
        return 1.0;
    }

    let hesitations = text
        .words
        .iter()
        .filter(|word| is_hesitation(word, lexicon))
        .count();

    unit(1.0 - hesitations as f64 / text.words.len() as f64)
}

fn is_hesitation(word: &str, lexicon: &Lexicon) -> bool {
    let bare = word.trim_matches(|c: char| matches!(c, ',' | ';' | ':' | '"'));
    let stripped = bare.trim_matches(|c: char| !c.is_alphanumeric());
    lexicon
        .hesitation_markers
        .iter()
        .any(|marker| marker == bare || (!stripped.is_empty() && marker == stripped))
}

/// `min(unique / total * 2, 1)`; 0 on empty text.
pub fn vocabulary(text: &Normalized) -> f64 {
    if text.tokens.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&String> = text.tokens.iter().collect();
    unit(unique.len() as f64 / text.tokens.len() as f64 * 2.0)
}

/// Repetition-freedom against the prior window.
///
/// Counts current tokens of at least four characters that already occur in
/// one of the `prior` samples; the score is `1 - repeated / total`, floored
/// at 0. With nothing to compare against the score is 1.
pub fn repetition_freedom(text: &Normalized, prior: &[Normalized]) -> f64 {
    if text.tokens.is_empty() || prior.is_empty() {
        return 1.0;
    }

    let seen: HashSet<&str> = prior
        .iter()
        .flat_map(|p| p.tokens.iter().map(String::as_str))
        .collect();

    let repeated = text
        .tokens
        .iter()
        .filter(|t| t.chars().count() >= MIN_REPEATED_TOKEN_CHARS && seen.contains(t.as_str()))
        .count();

    unit(1.0 - repeated as f64 / text.tokens.len() as f64)
}
