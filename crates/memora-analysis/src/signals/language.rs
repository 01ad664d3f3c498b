use super::unit;
use crate::lexicon::Lexicon;
use crate::normalize::Normalized;

/// Deducted per matched grammar-error phrase.
pub const GRAMMAR_ERROR_PENALTY: f64 = 0.2;

/// Mean token length over ten characters, capped at 1; 0 on empty text.
pub fn complexity(text: &Normalized) -> f64 {
    if text.tokens.is_empty() {
        return 0.0;
    }
    let total: usize = text.tokens.iter().map(|t| t.chars().count()).sum();
    unit(total as f64 / text.tokens.len() as f64 / 10.0)
}

/// `1 - 0.2 * matched error phrases`, floored at 0.
pub fn grammar_accuracy(text: &Normalized, lexicon: &Lexicon) -> f64 {
    let errors = text.count_matches(&lexicon.grammar_errors);
    unit(1.0 - GRAMMAR_ERROR_PENALTY * errors as f64)
}
