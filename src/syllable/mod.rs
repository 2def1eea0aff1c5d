//! Syllable estimation.
//!
//! Two tiers, consulted in order: pronunciation-dictionary lookup (counting
//! stress-marked phonemes) and a vowel-cluster heuristic for words the
//! dictionary does not know. Hyphenated compounds are estimated per piece
//! and summed.

use tracing::trace;

use crate::dict::PronunciationSource;
use crate::stats;


/// Dictionary-backed syllable counter with heuristic fallback.
#[derive(Debug, Clone)]
pub struct SyllableEstimator<D> {
    source: D,
}

impl<D: PronunciationSource> SyllableEstimator<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }

    /// Syllables in `word`.
    ///
    /// At least 1 for anything containing a letter or a hyphen; exactly 1
    /// for opaque tokens (numbers, bare punctuation, the empty string).
    pub fn count(&self, word: &str) -> usize {
        if !word.is_empty() && word.chars().all(char::is_alphabetic) {
            return self.count_alphabetic(word);
        }
        if word.contains('-') {
            return self.count_hyphenated(word);
        }
        1
    }

    fn count_alphabetic(&self, word: &str) -> usize {
        let key = word.to_lowercase();
        let Some(variants) = self.source.lookup(&key) else {
            // Names the dictionary predates.
            return match key.as_str() {
                "facebook" => 2,
                "thefacebook" => 3,
                "tumblr" => 2,
                _ => {
                    trace!(word, "no pronunciation entry, using heuristic");
                    heuristic_syllables(word)
                }
            };
        };

        // Dictionary-vs-common-usage mismatches.
        match word {
            "US" => return 2,
            "us" => return 1,
            "separate" => return 2,
            _ => {}
        }

        let counts: Vec<usize> = variants.iter().map(|v| stressed_phonemes(v)).collect();
        match counts.as_slice() {
            [] => heuristic_syllables(word),
            [only] => *only,
            many => stats::mode(many).unwrap_or_else(|| {
                trace!(word, "no unique mode across variants, using mean");
                let sum: usize = many.iter().sum();
                stats::round_half_even(sum as f64 / many.len() as f64) as usize
            }),
        }
    }

    fn count_hyphenated(&self, word: &str) -> usize {
        // Anything beyond ASCII letters and hyphens makes the token opaque.
        if word
            .chars()
            .any(|c| !c.is_ascii_alphabetic() && c != '-')
        {
            return 1;
        }
        if has_interior_hyphen(word) {
            return word.split('-').map(|piece| self.count(piece)).sum();
        }
        // "multi-" style truncations: estimate the stem.
        let stem = word.trim_end_matches('-');
        if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_alphabetic()) {
            return self.count(stem);
        }
        1
    }
}

/// A pronunciation's syllable count is its number of stress-marked phonemes
/// (symbols whose final character is a digit).
fn stressed_phonemes(pronunciation: &[String]) -> usize {
    pronunciation
        .iter()
        .filter(|p| p.chars().last().is_some_and(|c| c.is_ascii_digit()))
        .count()
}

/// A hyphen flanked by letters on both sides, anywhere in the token.
fn has_interior_hyphen(word: &str) -> bool {
    word.as_bytes()
        .windows(3)
        .any(|w| w[1] == b'-' && w[0].is_ascii_alphabetic() && w[2].is_ascii_alphabetic())
}

/// Vowel-cluster estimate for words outside the dictionary.
///
/// Counts transitions into vowel runs (`y` counts as a vowel), then applies
/// trailing-suffix adjustments: `e` −1, `le` +1, `sm` +1, `thm` +1. The
/// adjustments stack and run in exactly this order; the result is clamped
/// to a minimum of 1.
pub fn heuristic_syllables(word: &str) -> usize {
    const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];
    let word = word.to_lowercase();
    let mut count: i64 = 0;
    let mut prev_is_vowel = false;
    for c in word.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !prev_is_vowel {
            count += 1;
        }
        prev_is_vowel = is_vowel;
    }
    if word.ends_with('e') {
        count -= 1;
    }
    if word.ends_with("le") {
        count += 1;
    }
    if word.ends_with("sm") {
        count += 1;
    }
    if word.ends_with("thm") {
        count += 1;
    }
    count.max(1) as usize
}
