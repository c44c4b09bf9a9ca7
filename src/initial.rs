use tracing::trace;

use crate::lexicon::Lexicon;
use crate::tags;

/// First stage: each word gets the lexicon's preferred tag, or `NN`.
pub struct InitialTagger<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> InitialTagger<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Exact lookup, then lowercase lookup, then the default tag.
    ///
    /// Misses of every length land on `NN`, single characters included.
    pub fn assign(&self, word: &str) -> String {
        match self.lexicon.preferred_tag(word) {
            Some(tag) => tag.to_string(),
            None => {
                trace!(word, "lexicon miss");
                tags::DEFAULT.to_string()
            }
        }
    }

    pub fn assign_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words.iter().map(|w| self.assign(w.as_ref())).collect()
    }
}
