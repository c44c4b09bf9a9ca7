use tracing::debug;

use crate::initial::InitialTagger;
use crate::lexicon::Lexicon;
use crate::rules::RuleEngine;
use crate::token::TaggedWord;

/// Lexicon lookup followed by one pass of transformation rules.
///
/// The tagger owns its lexicon and holds no other state, so it can be shared
/// across threads and called concurrently.
pub struct PosTagger {
    lexicon: Lexicon,
    rules: RuleEngine,
}

impl PosTagger {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            rules: RuleEngine::new(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// True if `word` or its lowercase form has a lexicon entry.
    pub fn word_in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Tags a pre-tokenized sentence. Output is positionally aligned with `words`.
    pub fn tag<'a>(&self, words: &[&'a str]) -> Vec<TaggedWord<'a>> {
        let initial = InitialTagger::new(&self.lexicon).assign_all(words);
        let tags = self.rules.transform(words, initial);
        debug!(tokens = words.len(), "tagged sentence");

        words
            .iter()
            .zip(tags)
            .map(|(&word, tag)| TaggedWord::new(word, tag))
            .collect()
    }

    /// Same as [`tag`](Self::tag), for owned tokens.
    pub fn tag_owned<'a>(&self, words: &'a [String]) -> Vec<TaggedWord<'a>> {
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        self.tag(&words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> PosTagger {
        PosTagger::new(Lexicon::from_iter([
            ("i", vec!["PRP"]),
            ("the", vec!["DT"]),
            ("dog", vec!["NN"]),
            ("saw", vec!["VBD", "NN"]),
        ]))
    }

    #[test]
    fn test_word_in_lexicon() {
        let t = tagger();
        assert!(t.word_in_lexicon("dog"));
        assert!(t.word_in_lexicon("DOG"));
        assert!(t.word_in_lexicon("I"));
        assert!(!t.word_in_lexicon("cat"));
    }

    #[test]
    fn test_tag_pairs_words_with_tags() {
        let t = tagger();
        let tagged = t.tag(&["I", "saw", "the", "dog"]);
        let pairs: Vec<_> = tagged.into_iter().map(TaggedWord::into_pair).collect();
        assert_eq!(
            pairs,
            vec![
                ("I", "PRP".to_string()),
                ("saw", "VBD".to_string()),
                ("the", "DT".to_string()),
                ("dog", "NN".to_string()),
            ]
        );
    }

    #[test]
    fn test_tag_owned() {
        let t = tagger();
        let words = vec!["the".to_string(), "dog".to_string()];
        let tagged = t.tag_owned(&words);
        assert_eq!(tagged[0].word, "the");
        assert_eq!(tagged[1].tag, "NN");
    }

    #[test]
    fn test_tag_empty() {
        assert!(tagger().tag(&[]).is_empty());
    }
}
