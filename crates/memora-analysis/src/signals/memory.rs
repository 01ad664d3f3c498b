use std::collections::HashSet;

use super::unit;
use crate::lexicon::Lexicon;
use crate::normalize::{tokenize, Normalized};

/// Deducted per current sentence repeated from the prior window.
pub const REPEATED_SENTENCE_PENALTY: f64 = 0.2;

/// Deducted per contradictory pair of statements.
pub const CONTRADICTION_PENALTY: f64 = 0.3;

/// Tokens shorter than this are not treated as shared subject matter.
const MIN_CONTENT_TOKEN_CHARS: usize = 4;

/// Short-term memory: `1 - 0.2 * repeated sentences`, floored at 0.
///
/// A sentence is repeated when, ignoring case and punctuation, it equals a
/// sentence of one of the `prior` samples. With no prior sample the score
/// is 1.
pub fn short_term_memory(text: &Normalized, prior: &[Normalized]) -> f64 {
    if prior.is_empty() {
        return 1.0;
    }

    let seen: HashSet<String> = prior.iter().flat_map(|p| p.sentence_keys()).collect();
    let repeated = text
        .sentence_keys()
        .iter()
        .filter(|key| !key.is_empty() && seen.contains(*key))
        .count();

    unit(1.0 - REPEATED_SENTENCE_PENALTY * repeated as f64)
}

/// Long-term memory: `1 - stddev` of the last `window` cognitive scores,
/// floored at 0. Until `window` scores exist the score is 1: too little data
/// is read as consistent.
pub fn long_term_memory(recent_scores: &[f64], window: usize) -> f64 {
    if window == 0 || recent_scores.len() < window {
        return 1.0;
    }
    let scores = &recent_scores[recent_scores.len() - window..];
    unit(1.0 - std_dev(scores))
}

/// Population standard deviation; 0 for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Memory consistency: 1 minus [`CONTRADICTION_PENALTY`] per contradictory
/// (current sentence, prior sentence) pair, floored at 0.
///
/// Two statements contradict when one affirms and the other negates, and
/// they share at least one content token, e.g. "fui ao mercado" after "não
/// fui ao mercado".
pub fn memory_consistency(text: &Normalized, prior: &[Normalized], lexicon: &Lexicon) -> f64 {
    let current: Vec<Statement> = text
        .sentences
        .iter()
        .map(|s| Statement::parse(s, lexicon))
        .collect();
    let previous: Vec<Statement> = prior
        .iter()
        .flat_map(|p| p.sentences.iter())
        .map(|s| Statement::parse(s, lexicon))
        .collect();

    let contradictions = current
        .iter()
        .flat_map(|c| previous.iter().map(move |p| (c, p)))
        .filter(|(c, p)| c.contradicts(p))
        .count();

    unit(1.0 - CONTRADICTION_PENALTY * contradictions as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Affirmed,
    Negated,
    Unmarked,
}

struct Statement {
    polarity: Polarity,
    content: HashSet<String>,
}

impl Statement {
    fn parse(sentence: &str, lexicon: &Lexicon) -> Self {
        let tokens = tokenize(sentence);
        let is_marker = |t: &String| lexicon.negations.contains(t) || lexicon.affirmations.contains(t);

        let polarity = if tokens.iter().any(|t| lexicon.negations.contains(t)) {
            Polarity::Negated
        } else if tokens.iter().any(|t| lexicon.affirmations.contains(t)) {
            Polarity::Affirmed
        } else {
            Polarity::Unmarked
        };

        let content = tokens
            .iter()
            .filter(|t| t.chars().count() >= MIN_CONTENT_TOKEN_CHARS && !is_marker(*t))
            .cloned()
            .collect();

        Self { polarity, content }
    }

    fn contradicts(&self, other: &Statement) -> bool {
        let opposed = matches!(
            (self.polarity, other.polarity),
            (Polarity::Affirmed, Polarity::Negated) | (Polarity::Negated, Polarity::Affirmed)
        );
        opposed && !self.content.is_disjoint(&other.content)
    }
}
