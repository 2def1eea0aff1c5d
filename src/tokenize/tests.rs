use super::*;

#[test]
fn test_word_list_drops_bare_punctuation() {
    assert_eq!(
        word_list("Hello , world !"),
        vec!["Hello", "world"]
    );
}

#[test]
fn test_word_list_keeps_decimals() {
    assert_eq!(
        word_list("It costs 3.5 dollars."),
        vec!["It", "costs", "3.5", "dollars"]
    );
}

#[test]
fn test_word_list_keeps_contractions_whole() {
    assert_eq!(word_list("I don't know."), vec!["I", "don't", "know"]);
    assert_eq!(word_list("the dog's bone"), vec!["the", "dog's", "bone"]);
}

#[test]
fn test_word_list_collapses_urls() {
    assert_eq!(
        word_list("See example.com/page for info."),
        vec!["See", "example.com/page", "for", "info"]
    );
    assert_eq!(
        word_list("Visit www.example.com now."),
        vec!["Visit", "www.example.com", "now"]
    );
}

#[test]
fn test_word_list_keeps_hyphenated_words() {
    assert_eq!(
        word_list("a state-of-the-art design"),
        vec!["a", "state-of-the-art", "design"]
    );
}

#[test]
fn test_is_plain_alphanumeric() {
    assert!(is_plain_alphanumeric("word"));
    assert!(is_plain_alphanumeric("abc123"));
    assert!(!is_plain_alphanumeric("don't"));
    assert!(!is_plain_alphanumeric(""));
}

#[test]
fn test_has_contraction() {
    assert!(has_contraction("don't"));
    assert!(has_contraction("o'clock"));
    assert!(!has_contraction("boys'"));
    assert!(!has_contraction("rock"));
}

#[test]
fn test_is_domain_like() {
    assert!(is_domain_like("www.example.com"));
    assert!(is_domain_like("example.com/page"));
    assert!(is_domain_like("example.com/"));
    // Two groups with no path reads as an abbreviation, not a URL.
    assert!(!is_domain_like("example.com"));
    assert!(!is_domain_like("e.g"));
    assert!(!is_domain_like("3.5"));
}

#[test]
fn test_is_decimal() {
    assert!(is_decimal("3.5"));
    assert!(is_decimal("10.25"));
    assert!(!is_decimal("3."));
    assert!(!is_decimal("three"));
}

#[test]
fn test_hyphenated_with_alnum() {
    assert!(hyphenated_with_alnum("well-known"));
    assert!(hyphenated_with_alnum("x-"));
    assert!(!hyphenated_with_alnum("-"));
    assert!(!hyphenated_with_alnum("word"));
}

#[test]
fn test_sentence_split_basic() {
    let splitter = SentenceSplitter::new();
    assert_eq!(
        splitter.split("This is one. This is two."),
        vec!["This is one.", "This is two."]
    );
}

#[test]
fn test_sentence_split_filters_list_markers() {
    let splitter = SentenceSplitter::new();
    assert_eq!(
        splitter.split("1. Introduction. This is a test."),
        vec!["Introduction.", "This is a test."]
    );
}

#[test]
fn test_sentence_split_latin_abbreviations() {
    let splitter = SentenceSplitter::with_extra_abbreviations(["inc", "i.e", "e.g"]);
    assert_eq!(
        splitter
            .split("Some fruit, e.g. apples, are sweet. Others are not.")
            .len(),
        2
    );
    assert_eq!(
        splitter
            .split("The firm, i.e. Apple inc. itself, declined. Nobody commented.")
            .len(),
        2
    );
}

#[test]
fn test_sentence_split_titles_and_initials() {
    let splitter = SentenceSplitter::new();
    assert_eq!(
        splitter.split("Mr. Smith met Dr. Jones. They talked."),
        vec!["Mr. Smith met Dr. Jones.", "They talked."]
    );
    assert_eq!(
        splitter.split("The U.S. Government acted. It worked.").len(),
        2
    );
}

#[test]
fn test_sentence_split_terminal_runs_and_quotes() {
    let splitter = SentenceSplitter::new();
    assert_eq!(
        splitter.split("Really?! Yes. \"Stop.\" He left."),
        vec!["Really?!", "Yes.", "\"Stop.\"", "He left."]
    );
}

#[test]
fn test_sentence_split_no_trailing_terminator() {
    let splitter = SentenceSplitter::new();
    assert_eq!(
        splitter.split("First sentence. Second without a stop"),
        vec!["First sentence.", "Second without a stop"]
    );
}

#[test]
fn test_sentence_split_decimal_is_no_boundary() {
    let splitter = SentenceSplitter::new();
    assert_eq!(
        splitter.split("It costs 3.5 dollars. That is cheap."),
        vec!["It costs 3.5 dollars.", "That is cheap."]
    );
}
