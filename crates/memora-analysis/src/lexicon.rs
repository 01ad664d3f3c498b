//! Keyword and phrase tables, Portuguese first, then English.
//!
//! Pure data. Each table is matched phrase-wise against normalized tokens
//! (see [`crate::normalize::Normalized::contains_phrase`]).

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

pub const TEMPORAL_MARKERS: &[&str] = &[
    "hoje", "ontem", "amanhã", "agora", "manhã", "tarde", "noite", "semana", "mês", "ano",
    "today", "yesterday", "tomorrow", "now", "morning", "afternoon", "evening", "night", "week",
    "month", "year",
];

/// Words that reference "the day" and so invite a check of the weekday.
pub const DAY_WORDS: &[&str] = &["dia", "day"];

pub const SPATIAL_MARKERS: &[&str] = &[
    "aqui", "ali", "lá", "casa", "quarto", "sala", "cozinha", "hospital", "rua", "cidade", "here",
    "there", "home", "house", "room", "bedroom", "kitchen", "street", "city",
];

pub const HESITATION_MARKERS: &[&str] = &[
    "uh", "um", "eh", "ah", "hum", "hmm", "er", "erm", "...", "…",
];

pub const GRAMMAR_ERRORS: &[&str] = &[
    "me dá",
    "tinha que",
    "pra mim fazer",
    "entre eu e",
    "há anos atrás",
    "mau feito",
    "should of",
    "could of",
    "would of",
    "between you and i",
    "me and him is",
];

pub const POSITIVE: &[&str] = &[
    "feliz", "contente", "alegre", "bem", "ótimo", "maravilhoso", "excelente", "tranquilo",
    "happy", "good", "great", "wonderful", "excited", "glad",
];

pub const NEGATIVE: &[&str] = &[
    "triste", "chateado", "preocupado", "ansioso", "nervoso", "irritado", "mal", "sad", "upset",
    "angry", "frustrated", "worried",
];

pub const NEUTRAL: &[&str] = &[
    "normal", "regular", "mais ou menos", "assim", "comum", "habitual", "costume", "so so",
    "okay", "usual",
];

pub const CONFUSED: &[&str] = &[
    "não sei", "talvez", "confuso", "perdido", "esqueci", "não lembro", "difícil", "don't know",
    "confused", "lost", "forgot", "maybe",
];

pub const FATIGUED: &[&str] = &[
    "cansado", "cansada", "exausto", "exausta", "sono", "tired", "exhausted", "sleepy",
];

pub const CONFUSION_INDICATORS: &[&str] = &[
    "não sei",
    "não lembro",
    "confuso",
    "perdido",
    "onde estou",
    "que dia é",
    "where am i",
    "what day is it",
    "don't remember",
    "confused",
];

pub const AGITATION_INDICATORS: &[&str] = &[
    "nervoso",
    "ansioso",
    "inquieto",
    "não consigo",
    "difícil",
    "irritado",
    "nervous",
    "anxious",
    "restless",
    "can't",
    "annoyed",
];

pub const SOCIAL_WORDS: &[&str] = &[
    "nós", "juntos", "conversar", "amigos", "família", "we", "together", "talk", "friends",
    "family",
];

pub const WITHDRAWAL_WORDS: &[&str] = &[
    "sozinho",
    "sozinha",
    "ninguém",
    "não quero falar",
    "deixa-me",
    "alone",
    "nobody",
    "leave me alone",
    "don't want to talk",
];

/// Verb forms that mark a statement as an affirmation of something done or
/// being true.
pub const AFFIRMATIONS: &[&str] = &[
    "fiz", "tenho", "estou", "sou", "fui", "estive", "comi", "tomei", "did", "have", "am", "was",
    "went", "ate", "took",
];

pub const NEGATIONS: &[&str] = &[
    "não", "nunca", "nada", "not", "never", "didn't", "haven't", "wasn't", "don't",
    "isn't",
];

/// Common verb forms, used by the coherence heuristic.
pub const VERBS: &[&str] = &[
    "é", "está", "estou", "sou", "são", "foi", "fui", "era", "tenho", "tem", "vou", "vai", "fiz",
    "fez", "gosto", "quero", "sei", "lembro", "estive", "comi", "tomei", "ir", "ver", "is", "am",
    "are", "was", "were", "be", "have", "has", "had", "do", "does", "did", "go", "went", "want",
    "like", "know", "remember", "ate", "feel", "think", "took",
];

/// Inflectional endings that mark a token as a likely verb.
pub const VERB_SUFFIXES: &[&str] = &[
    "ando", "endo", "indo", "aram", "eram", "iram", "ava", "ia", "ar", "er", "ir", "ou", "ei",
    "ing", "ed",
];

/// Weekday names in Portuguese and English, as they appear in lowercased text.
pub fn weekday_names(weekday: Weekday) -> &'static [&'static str] {
    match weekday {
        Weekday::Monday => &["segunda", "monday"],
        Weekday::Tuesday => &["terça", "terca", "tuesday"],
        Weekday::Wednesday => &["quarta", "wednesday"],
        Weekday::Thursday => &["quinta", "thursday"],
        Weekday::Friday => &["sexta", "friday"],
        Weekday::Saturday => &["sábado", "sabado", "saturday"],
        Weekday::Sunday => &["domingo", "sunday"],
    }
}

/// The full set of tables an analyzer matches against.
///
/// `Default` yields the built-in tables above. Every field is optional when
/// deserializing, so a configuration file only needs to list the tables it
/// replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub temporal_markers: Vec<String>,
    pub day_words: Vec<String>,
    pub spatial_markers: Vec<String>,
    pub hesitation_markers: Vec<String>,
    pub grammar_errors: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral: Vec<String>,
    pub confused: Vec<String>,
    pub fatigued: Vec<String>,
    pub confusion_indicators: Vec<String>,
    pub agitation_indicators: Vec<String>,
    pub social_words: Vec<String>,
    pub withdrawal_words: Vec<String>,
    pub affirmations: Vec<String>,
    pub negations: Vec<String>,
    pub verbs: Vec<String>,
    pub verb_suffixes: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            temporal_markers: owned(TEMPORAL_MARKERS),
            day_words: owned(DAY_WORDS),
            spatial_markers: owned(SPATIAL_MARKERS),
            hesitation_markers: owned(HESITATION_MARKERS),
            grammar_errors: owned(GRAMMAR_ERRORS),
            positive: owned(POSITIVE),
            negative: owned(NEGATIVE),
            neutral: owned(NEUTRAL),
            confused: owned(CONFUSED),
            fatigued: owned(FATIGUED),
            confusion_indicators: owned(CONFUSION_INDICATORS),
            agitation_indicators: owned(AGITATION_INDICATORS),
            social_words: owned(SOCIAL_WORDS),
            withdrawal_words: owned(WITHDRAWAL_WORDS),
            affirmations: owned(AFFIRMATIONS),
            negations: owned(NEGATIONS),
            verbs: owned(VERBS),
            verb_suffixes: owned(VERB_SUFFIXES),
        }
    }
}

impl Lexicon {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `token` looks like a verb: a listed form, or a token of at
    /// least four characters ending in a listed suffix.
    pub fn is_verb(&self, token: &str) -> bool {
        if self.verbs.iter().any(|v| v == token) {
            return true;
        }
        token.chars().count() >= 4 && self.verb_suffixes.iter().any(|s| token.ends_with(s.as_str()))
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
