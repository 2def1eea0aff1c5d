//! Part-of-speech tagging seam.

/// Assigns one tag label per word, positionally aligned with the input.
///
/// Tags follow Penn Treebank conventions as far as the fog-index
/// complex-word rule cares: proper nouns carry `NNP` and verb forms start
/// with `VB`.
pub trait PosTagger {
    fn tag(&self, words: &[String]) -> Vec<String>;
}

/// Built-in stand-in tagger.
///
/// Capitalized tokens tag as `NNP`, inflection suffixes as verb forms,
/// everything else as `NN`. Coarse, but it covers the two distinctions the
/// fog-index rule draws; anything better plugs in through [`PosTagger`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicTagger;

impl PosTagger for HeuristicTagger {
    fn tag(&self, words: &[String]) -> Vec<String> {
        words
            .iter()
            .map(|word| {
                if word.chars().next().is_some_and(char::is_uppercase) {
                    "NNP"
                } else if word.ends_with("ing") {
                    "VBG"
                } else if word.ends_with("ed") {
                    "VBD"
                } else if word.ends_with("es") {
                    "VBZ"
                } else {
                    "NN"
                }
                .to_string()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_tagger() {
        let words: Vec<String> = ["London", "running", "jumped", "agrees", "cat"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let tags = HeuristicTagger.tag(&words);
        assert_eq!(tags, vec!["NNP", "VBG", "VBD", "VBZ", "NN"]);
    }

    #[test]
    fn test_tags_align_positionally() {
        let words: Vec<String> = vec!["one".into(), "two".into()];
        assert_eq!(HeuristicTagger.tag(&words).len(), words.len());
    }
}
