//! Pronunciation lookup.
//!
//! [`PronunciationSource`] is the seam between the syllable estimator and
//! whatever supplies pronunciations. [`PhonemeDictionary`] is the bundled
//! implementation: an in-memory map following CMUdict conventions, where a
//! pronunciation is a list of ARPAbet phoneme symbols and a trailing digit
//! on a symbol marks a stressed vowel nucleus.

use std::io::BufRead;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{Error, Result};

/// One pronunciation variant: an ordered list of phoneme symbols.
pub type Pronunciation = Vec<String>;

/// Word → candidate pronunciations lookup.
pub trait PronunciationSource {
    /// All known pronunciation variants for `word`, or `None` when the word
    /// is absent. Matching is case-insensitive.
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]>;
}

/// In-memory pronunciation dictionary keyed by lowercase word.
#[derive(Debug, Default, Clone)]
pub struct PhonemeDictionary {
    entries: FxHashMap<String, Vec<Pronunciation>>,
}

impl PhonemeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one pronunciation variant for `word`.
    pub fn insert<I, S>(&mut self, word: &str, phonemes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(phonemes.into_iter().map(Into::into).collect());
    }

    /// Parse CMUdict-format text: one `WORD  F OW1 N IY0 M Z` entry per
    /// line, `;;;` comment lines, alternate pronunciations marked `WORD(2)`
    /// and folded into the base word.
    pub fn parse(text: &str) -> Result<Self> {
        let mut dict = Self::new();
        for (idx, line) in text.lines().enumerate() {
            dict.parse_line(line, idx + 1)?;
        }
        Ok(dict)
    }

    /// Parse CMUdict-format text from a reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dict = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            dict.parse_line(&line, idx + 1)?;
        }
        debug!(words = dict.len(), "loaded pronunciation dictionary");
        Ok(dict)
    }

    fn parse_line(&mut self, line: &str, number: usize) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(";;;") {
            return Ok(());
        }
        let mut fields = line.split_whitespace();
        let word = fields
            .next()
            .ok_or(Error::MalformedEntry { line: number })?;
        let phonemes: Vec<String> = fields.map(str::to_string).collect();
        if phonemes.is_empty() {
            return Err(Error::MalformedEntry { line: number });
        }
        // HOUSE and HOUSE(2) share one key.
        let word = match word.find('(') {
            Some(idx) if word.ends_with(')') => &word[..idx],
            _ => word,
        };
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(phonemes);
        Ok(())
    }
}

impl PronunciationSource for PhonemeDictionary {
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(&word.to_lowercase()).map(Vec::as_slice)
    }
}
