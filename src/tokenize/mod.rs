//! Text segmentation and token retention.
//!
//! [`word_list`] segments raw text and keeps only tokens that count as
//! words for the readability formulas: plain alphanumerics, contractions,
//! decimals, hyphenated words, and URL-like strings collapsed to a single
//! token (a URL is not read the way running text is, so it must not count
//! as several words). Each retention rule is a named predicate so the
//! filter stays auditable.
//!
//! [`SentenceSplitter`] lives in [`sentences`].

use std::sync::OnceLock;

use regex::Regex;

mod sentences;

pub use sentences::SentenceSplitter;

#[cfg(test)]
mod tests;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();
static CONTRACTION_PATTERN: OnceLock<Regex> = OnceLock::new();
static DOMAIN_PATTERN: OnceLock<Regex> = OnceLock::new();
static DECIMAL_PATTERN: OnceLock<Regex> = OnceLock::new();

// Branch order matters: the segmenter prefers the longest structured
// reading of a span (domain, then decimal, then word) before falling back
// to single punctuation marks.
fn token_pattern() -> &'static Regex {
    TOKEN_PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"[A-Za-z]+(?:\.[A-Za-z]+)+(?:/[A-Za-z0-9]*)?",
            r"|\d+\.\d+",
            r"|[A-Za-z0-9]+(?:['-][A-Za-z0-9]+)*",
            r"|[^\sA-Za-z0-9]",
        ))
        .unwrap()
    })
}

/// Every character alphanumeric; no embedded punctuation at all.
fn is_plain_alphanumeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Possessives and contractions: an apostrophe followed by letters.
fn has_contraction(token: &str) -> bool {
    CONTRACTION_PATTERN
        .get_or_init(|| Regex::new(r"'[A-Za-z]+").unwrap())
        .is_match(token)
}

/// Dotted-domain shape: at least three dot-separated letter groups, or two
/// groups followed by a `/path` of alphanumerics.
fn is_domain_like(token: &str) -> bool {
    let pattern = DOMAIN_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z]+((?:\.[A-Za-z]+)+)(/[A-Za-z0-9]*)?$").unwrap()
    });
    let Some(caps) = pattern.captures(token) else {
        return false;
    };
    let dot_groups = caps[1].matches('.').count();
    dot_groups >= 2 || caps.get(2).is_some()
}

/// Decimal numbers like `3.5`.
fn is_decimal(token: &str) -> bool {
    DECIMAL_PATTERN
        .get_or_init(|| Regex::new(r"\d+\.\d+").unwrap())
        .is_match(token)
}

/// Hyphenated tokens that still carry word material.
fn hyphenated_with_alnum(token: &str) -> bool {
    token.contains('-') && token.chars().any(char::is_alphanumeric)
}

fn keep_token(token: &str) -> bool {
    is_plain_alphanumeric(token)
        || has_contraction(token)
        || is_domain_like(token)
        || is_decimal(token)
        || hyphenated_with_alnum(token)
}

/// Split `text` into countable word tokens.
///
/// Bare punctuation is dropped; decimals, contractions, hyphenated words,
/// and URL-like strings each survive as one token.
pub fn word_list(text: &str) -> Vec<String> {
    token_pattern()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| keep_token(token))
        .map(str::to_string)
        .collect()
}
