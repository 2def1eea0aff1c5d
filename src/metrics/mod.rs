//! Readability metric calculators.
//!
//! Four scores over the same tokenization pipeline:
//!
//! - FRES: sentence length and syllable density
//! - ARI: character/word/sentence ratios
//! - GFI: sentence length plus complex-word share
//! - SMOG: difficult words over a fixed sentence sample
//!
//! Every formula divides by the word and sentence totals; callers must hand
//! in text with at least one countable word and sentence, or the float
//! arithmetic degenerates to NaN/infinity.

use serde::{Deserialize, Serialize};

use crate::convert::{convert_ari, convert_fres, convert_gfi, AgeEstimate};
use crate::dict::PronunciationSource;
use crate::stats::{py_slice, round_half_even};
use crate::syllable::SyllableEstimator;
use crate::tagger::PosTagger;
use crate::tokenize::{word_list, SentenceSplitter};


/// Abbreviations beyond the splitter defaults that the analyzer treats as
/// non-terminating.
const EXTRA_ABBREVIATIONS: &[&str] = &["inc", "i.e", "e.g"];

/// Readability analyzer over injected collaborators.
///
/// Owns the pronunciation source (through a [`SyllableEstimator`]), the POS
/// tagger used by the fog index, and the sentence splitter. Immutable after
/// construction; analysis methods take `&self`, so one analyzer can serve
/// any number of threads.
#[derive(Debug, Clone)]
pub struct Analyzer<D, T> {
    syllables: SyllableEstimator<D>,
    tagger: T,
    splitter: SentenceSplitter,
}

impl<D: PronunciationSource, T: PosTagger> Analyzer<D, T> {
    pub fn new(source: D, tagger: T) -> Self {
        Self {
            syllables: SyllableEstimator::new(source),
            tagger,
            splitter: SentenceSplitter::with_extra_abbreviations(
                EXTRA_ABBREVIATIONS.iter().copied(),
            ),
        }
    }

    /// Syllables in a single word (dictionary first, heuristic fallback).
    pub fn syllable_count(&self, word: &str) -> usize {
        self.syllables.count(word)
    }

    pub fn word_list(&self, text: &str) -> Vec<String> {
        word_list(text)
    }

    pub fn sentence_list(&self, text: &str) -> Vec<String> {
        self.splitter.split(text)
    }

    pub fn word_count(&self, text: &str) -> usize {
        word_list(text).len()
    }

    pub fn sentence_count(&self, text: &str) -> usize {
        self.splitter.split(text).len()
    }

    /// Words with three or more syllables.
    pub fn complex_word_count(&self, text: &str) -> usize {
        word_list(text)
            .iter()
            .filter(|word| self.syllables.count(word) >= 3)
            .count()
    }

    /// Flesch Reading Ease Score; higher reads easier.
    pub fn fres(&self, text: &str) -> f64 {
        let words = word_list(text);
        let total_words = words.len() as f64;
        let total_sentences = self.splitter.split(text).len() as f64;
        let total_syllables: usize = words.iter().map(|w| self.syllables.count(w)).sum();

        206.835
            - 1.015 * (total_words / total_sentences)
            - 84.6 * (total_syllables as f64 / total_words)
    }

    /// Automated Readability Index: a U.S. grade level from
    /// character/word/sentence ratios.
    pub fn ari(&self, text: &str) -> f64 {
        let words = word_list(text);
        let total_words = words.len() as f64;
        let total_sentences = self.splitter.split(text).len() as f64;
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();

        4.71 * (total_chars as f64 / total_words) + 0.5 * (total_words / total_sentences) - 21.43
    }

    /// Gunning Fog Index.
    ///
    /// A word is complex when it has three or more syllables and is neither
    /// a proper noun, a hyphenated compound, nor a three-syllable inflected
    /// verb form (`-es`/`-ed`/`-ing`). The complex-word term enters the
    /// formula as a plain fraction rather than the textbook percentage;
    /// kept that way because the age-conversion table is calibrated to
    /// these outputs.
    pub fn gfi(&self, text: &str) -> f64 {
        let words = word_list(text);
        let total_words = words.len() as f64;
        let total_sentences = self.splitter.split(text).len() as f64;
        let tags = self.tagger.tag(&words);

        let mut complex_words = 0usize;
        for (word, tag) in words.iter().zip(&tags) {
            let syllables = self.syllables.count(word);
            let inflected_verb = syllables == 3
                && tag.contains("VB")
                && (word.ends_with("es") || word.ends_with("ed") || word.ends_with("ing"));
            if syllables >= 3 && !tag.contains("NNP") && !word.contains('-') && !inflected_verb {
                complex_words += 1;
            }
        }

        let avg_sentence_len = total_words / total_sentences;
        let percent_complex_words = complex_words as f64 / total_words;
        (avg_sentence_len + percent_complex_words) * 0.4
    }

    /// Simple Measure of Gobbledygook over a fixed sentence sample.
    ///
    /// Samples the first ten, middle, and last ten sentences; texts under
    /// ten sentences degenerate (the windows overlap) and are not guarded.
    pub fn smog(&self, text: &str) -> i64 {
        let sentences = self.splitter.split(text);
        let sample = smog_sample(&sentences);
        let difficult = word_list(&sample)
            .iter()
            .filter(|word| self.syllables.count(word) >= 3)
            .count();

        round_half_even((difficult as f64).sqrt()) + 3
    }

    /// Every metric, count, and age conversion for one text.
    pub fn report(&self, text: &str) -> ReadabilityReport {
        let fres = self.fres(text);
        let ari = self.ari(text);
        let gfi = self.gfi(text);
        ReadabilityReport {
            fres,
            ari,
            gfi,
            smog: self.smog(text),
            word_count: self.word_count(text),
            sentence_count: self.sentence_count(text),
            complex_word_count: self.complex_word_count(text),
            fres_age: convert_fres(fres),
            ari_age: convert_ari(ari),
            gfi_age: convert_gfi(gfi),
        }
    }
}

/// The SMOG sample: first ten sentences, the middle slice
/// `[floor(n/2 − 5), round(n/2 − 5))` (ties to even — empty for even
/// totals), and the last ten. The three space-joined groups concatenate
/// with no separator between them.
fn smog_sample(sentences: &[String]) -> String {
    let n = sentences.len();
    let start = py_slice(sentences, 0, 10);
    let mid_point = n as f64 / 2.0 - 5.0;
    let middle = py_slice(
        sentences,
        mid_point.floor() as i64,
        round_half_even(mid_point),
    );
    let end = py_slice(sentences, n as i64 - 10, n as i64);
    format!("{}{}{}", start.join(" "), middle.join(" "), end.join(" "))
}

/// Every metric, count, and age conversion for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub fres: f64,
    pub ari: f64,
    pub gfi: f64,
    pub smog: i64,
    pub word_count: usize,
    pub sentence_count: usize,
    pub complex_word_count: usize,
    pub fres_age: AgeEstimate,
    pub ari_age: AgeEstimate,
    pub gfi_age: AgeEstimate,
}
