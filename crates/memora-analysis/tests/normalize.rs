use memora_analysis::normalize::{normalize, tokenize};

#[test]
fn empty_input_yields_empty_sequences() {
    for text in ["", "   ", "\n\t"] {
        let n = normalize(text);
        assert!(n.is_empty());
        assert!(n.words.is_empty());
        assert!(n.tokens.is_empty());
        assert!(n.sentences.is_empty());
    }
}

#[test]
fn sentences_split_on_terminal_runs() {
    let n = normalize("Olá!  Tudo bem?? Sim…");
    assert_eq!(n.sentences, vec!["Olá", "Tudo bem", "Sim"]);
}

#[test]
fn tokens_are_lowercased_and_stripped() {
    let n = normalize("Eu FUI, ao \"Mercado\"!");
    assert_eq!(n.tokens, vec!["eu", "fui", "ao", "mercado"]);
    assert_eq!(n.words, vec!["eu", "fui,", "ao", "\"mercado\"!"]);
}

#[test]
fn phrase_matching_respects_token_boundaries() {
    let n = normalize("Estou normal hoje");
    assert!(n.contains_phrase("normal"));
    assert!(!n.contains_phrase("mal"));
}

#[test]
fn multi_word_phrases_match_contiguously() {
    let n = normalize("Eu não sei onde estou.");
    assert!(n.contains_phrase("não sei"));
    assert!(n.contains_phrase("onde estou"));
    assert!(!n.contains_phrase("sei não"));
}

#[test]
fn typographic_apostrophes_are_folded() {
    let n = normalize("I don’t know");
    assert!(n.contains_phrase("don't know"));
}

#[test]
fn sentence_keys_ignore_case_and_punctuation() {
    let a = normalize("Eu fui ao mercado.");
    let b = normalize("eu FUI ao mercado!!");
    assert_eq!(a.sentence_keys(), b.sentence_keys());
}

#[test]
fn tokenize_matches_normalize() {
    let text = "Hoje é segunda-feira, certo?";
    assert_eq!(tokenize(text), normalize(text).tokens);
}
