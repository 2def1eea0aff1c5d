//! Readability metrics for English text.
//!
//! `legibility` computes four standard readability scores — Flesch Reading
//! Ease, Automated Readability Index, Gunning Fog Index, and SMOG — plus
//! the word/sentence/complex-word statistics behind them, and converts
//! scores to estimated reading ages.
//!
//! The interesting machinery sits in two places: syllable estimation
//! (pronunciation-dictionary lookup with a vowel-cluster fallback) and the
//! tokenization pipeline feeding every formula (a word filter that keeps
//! URLs, decimals, and contractions as single tokens, and an
//! abbreviation-aware sentence splitter). The formulas themselves are one
//! line each.
//!
//! # Usage
//!
//! ```
//! use legibility::{Analyzer, HeuristicTagger, PhonemeDictionary};
//!
//! let mut dict = PhonemeDictionary::new();
//! dict.insert("reading", ["R", "IY1", "D", "IH0", "NG"]);
//! let analyzer = Analyzer::new(dict, HeuristicTagger);
//!
//! let text = "Reading ages are estimated from sentence and word shape.";
//! assert!(analyzer.fres(text).is_finite());
//! assert_eq!(analyzer.sentence_count(text), 1);
//! ```
//!
//! Metric denominators divide by the word and sentence totals: callers
//! must hand in text with at least one countable word and one sentence.

pub mod convert;
pub mod dict;
mod error;
pub mod metrics;
mod stats;
pub mod syllable;
pub mod tagger;
pub mod tokenize;

pub use convert::{convert_ari, convert_fres, convert_gfi, AgeEstimate};
pub use dict::{PhonemeDictionary, Pronunciation, PronunciationSource};
pub use error::{Error, Result};
pub use metrics::{Analyzer, ReadabilityReport};
pub use syllable::{heuristic_syllables, SyllableEstimator};
pub use tagger::{HeuristicTagger, PosTagger};
pub use tokenize::{word_list, SentenceSplitter};
