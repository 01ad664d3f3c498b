//! Text normalization shared by every signal analyzer.

use std::collections::HashSet;

/// Characters that end a sentence. Runs of them count as one boundary.
const SENTENCE_TERMINALS: [char; 4] = ['.', '!', '?', '…'];

/// Pre-processed input text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    /// The text as received, casing preserved for display.
    pub original: String,
    /// Lowercased whitespace-split words, punctuation kept.
    pub words: Vec<String>,
    /// Lowercased words with leading and trailing punctuation stripped.
    pub tokens: Vec<String>,
    /// Sentences in original casing with whitespace collapsed.
    pub sentences: Vec<String>,
    token_set: HashSet<String>,
}

impl Normalized {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Lowercased text with whitespace collapsed.
    pub fn lowered(&self) -> String {
        self.words.join(" ")
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.token_set.contains(token)
    }

    /// Whether `phrase` occurs as a contiguous run of tokens.
    ///
    /// The phrase is tokenized the same way as the text, so `"Não sei!"`
    /// matches the text `"eu não sei"`, and `"mal"` does not match `"normal"`.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        let phrase_tokens = tokenize(phrase);
        match phrase_tokens.len() {
            0 => false,
            1 => self.contains_token(&phrase_tokens[0]),
            n => self
                .tokens
                .windows(n)
                .any(|window| window.iter().zip(&phrase_tokens).all(|(a, b)| a == b)),
        }
    }

    /// Number of distinct entries of `phrases` found in the text.
    pub fn count_matches(&self, phrases: &[String]) -> usize {
        phrases.iter().filter(|p| self.contains_phrase(p)).count()
    }

    /// Tokens of each sentence, in sentence order.
    pub fn sentence_tokens(&self) -> Vec<Vec<String>> {
        self.sentences.iter().map(|s| tokenize(s)).collect()
    }

    /// Sentences reduced to their joined tokens, for equality comparison
    /// that ignores case and punctuation.
    pub fn sentence_keys(&self) -> Vec<String> {
        self.sentences.iter().map(|s| tokenize(s).join(" ")).collect()
    }
}

/// Lowercase, tokenize and sentence-split `text`. Never fails; empty or
/// whitespace-only input yields empty sequences.
pub fn normalize(text: &str) -> Normalized {
    let words: Vec<String> = text.split_whitespace().map(fold_word).collect();
    let tokens: Vec<String> = words.iter().filter_map(|w| strip_token(w)).collect();
    let token_set = tokens.iter().cloned().collect();

    Normalized {
        original: text.to_string(),
        words,
        tokens,
        sentences: split_sentences(text),
        token_set,
    }
}

/// Tokenize without building the rest of a [`Normalized`].
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|w| strip_token(&fold_word(w)))
        .collect()
}

/// Lowercase and fold typographic apostrophes to ASCII.
fn fold_word(word: &str) -> String {
    word.replace(['\u{2019}', '\u{2018}'], "'").to_lowercase()
}

fn strip_token(word: &str) -> Option<String> {
    let token = word.trim_matches(|c: char| !c.is_alphanumeric());
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    text.split(|c: char| SENTENCE_TERMINALS.contains(&c))
        .map(|segment| segment.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|sentence| sentence.chars().any(char::is_alphanumeric))
        .collect()
}
