use catindex_core::tokenizer::{is_stop_word, tokenize};

#[test]
fn it_lowercases_and_splits_on_whitespace() {
    let words = tokenize("Running Runners RUN! The café's\tmenu.\n");
    assert_eq!(words, vec!["running", "runners", "run!", "the", "café's", "menu."]);
}

#[test]
fn it_keeps_stopwords_for_callers_to_filter() {
    let words = tokenize("The quick brown fox and the lazy dog");
    assert!(words.contains(&"the".to_string()));
    assert!(words.contains(&"and".to_string()));
    let kept: Vec<&String> = words.iter().filter(|w| !is_stop_word(w)).collect();
    assert_eq!(kept, vec!["quick", "brown", "fox", "lazy", "dog"]);
}

#[test]
fn it_does_not_normalize_unicode() {
    // precomposed vs combining acute accent
    let composed = tokenize("Caf\u{e9}");
    let decomposed = tokenize("Cafe\u{301}");
    assert_ne!(composed, decomposed);
}
