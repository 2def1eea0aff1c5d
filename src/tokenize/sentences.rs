//! Sentence boundary detection.
//!
//! Rule-based splitter: a run of terminal punctuation (plus any closing
//! quotes or brackets) ends a sentence when followed by whitespace or end
//! of input, except that a lone period after a known abbreviation or an
//! initials-like token is no boundary. Segments without a single ASCII
//! letter are discarded, so numbered-list markers like `1.` never count as
//! sentences.

use rustc_hash::FxHashSet;

/// Common English abbreviations that do not terminate a sentence.
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "st", "jr", "sr", "vs", "etc", "al", "approx",
    "dept", "est", "fig", "vol", "pp", "cf", "ca", "gen", "col", "sgt", "capt", "lt",
];

#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: FxHashSet<String>,
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter {
    pub fn new() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// A splitter whose abbreviation set is extended with entries that must
    /// not end a sentence (compare `"inc"`, `"i.e"`, `"e.g"`).
    pub fn with_extra_abbreviations<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut splitter = Self::new();
        for abbreviation in extra {
            let abbreviation: String = abbreviation.into();
            splitter.abbreviations.insert(abbreviation.to_lowercase());
        }
        splitter
    }

    /// Sentences of `text`, trimmed, punctuation-only segments removed.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;
        while i < chars.len() {
            if !is_terminal(chars[i]) {
                i += 1;
                continue;
            }
            let mut end = i + 1;
            while end < chars.len() && is_terminal(chars[end]) {
                end += 1;
            }
            let lone_period = chars[i] == '.' && end == i + 1;
            while end < chars.len() && is_closing(chars[end]) {
                end += 1;
            }
            let at_break = end >= chars.len() || chars[end].is_whitespace();
            if at_break && !(lone_period && self.is_protected(&chars, i)) {
                push_segment(&mut sentences, &chars[start..end]);
                while end < chars.len() && chars[end].is_whitespace() {
                    end += 1;
                }
                start = end;
            }
            i = end.max(i + 1);
        }
        if start < chars.len() {
            push_segment(&mut sentences, &chars[start..]);
        }
        sentences
    }

    // The token before a period, scanned back over letters and embedded
    // dots; abbreviations and initials do not end a sentence.
    fn is_protected(&self, chars: &[char], period: usize) -> bool {
        let mut begin = period;
        while begin > 0 && (chars[begin - 1].is_ascii_alphabetic() || chars[begin - 1] == '.') {
            begin -= 1;
        }
        if begin == period {
            return false;
        }
        let token: String = chars[begin..period].iter().collect::<String>().to_lowercase();
        let token = token.trim_matches('.');
        if token.is_empty() {
            return false;
        }
        if self.abbreviations.contains(token) {
            return true;
        }
        // Initials like "U.S." or "J.": single letters between dots.
        token
            .split('.')
            .all(|piece| piece.len() == 1 && piece.chars().all(|c| c.is_ascii_alphabetic()))
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

fn push_segment(sentences: &mut Vec<String>, chars: &[char]) {
    let segment = chars.iter().collect::<String>().trim().to_string();
    // A sentence must contain at least one letter.
    if segment.chars().any(|c| c.is_ascii_alphabetic()) {
        sentences.push(segment);
    }
}
