use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::data::{self, RawLexicon};
use crate::error::Result;

/// Read-only word -> candidate tags mapping.
///
/// Candidates are ordered, preferred tag first. Lookups try the word as given,
/// then its lowercase form. Nothing mutates a `Lexicon` once it is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawLexicon")]
pub struct Lexicon {
    entries: HashMap<String, Vec<String>>,
}

impl Lexicon {
    pub fn from_map(map: HashMap<String, Vec<String>>) -> Self {
        let unusable = map.values().filter(|tags| tags.is_empty()).count();
        debug!(entries = map.len(), unusable, "lexicon built");
        Self { entries: map }
    }

    /// Parses a JSON object of the form `{"word": ["TAG", ...], ...}`.
    pub fn from_json(json: &str) -> Result<Self> {
        data::load_json(json).map(Self::from_map)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        data::load_reader(reader).map(Self::from_map)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        data::load_path(path.as_ref()).map(Self::from_map)
    }

    /// Exact-key lookup.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Exact-key lookup, falling back to the lowercase form of `word`.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.get(word).or_else(|| self.get(&word.to_lowercase()))
    }

    /// Key presence for `word` or its lowercase form, whether or not the entry
    /// has any candidates.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// First candidate of [`lookup`](Self::lookup).
    ///
    /// An empty entry found by the exact lookup shadows the lowercase one and
    /// yields `None`.
    pub fn preferred_tag(&self, word: &str) -> Option<&str> {
        self.lookup(word)
            .and_then(|tags| tags.first())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<RawLexicon> for Lexicon {
    fn from(raw: RawLexicon) -> Self {
        Self::from_map(raw)
    }
}

impl<W, T> FromIterator<(W, Vec<T>)> for Lexicon
where
    W: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, Vec<T>)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(word, tags)| {
                    let word: String = word.into();
                    let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
                    (word, tags)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        Lexicon::from_iter([
            ("the", vec!["DT"]),
            ("run", vec!["VB", "NN"]),
            ("Paris", vec!["NNP"]),
            ("ghost", vec![]),
        ])
    }

    #[test]
    fn test_exact_lookup() {
        let lex = sample();
        assert_eq!(lex.get("run"), Some(&["VB".to_string(), "NN".to_string()][..]));
        assert_eq!(lex.get("Run"), None);
    }

    #[test]
    fn test_lowercase_fallback() {
        let lex = sample();
        assert_eq!(lex.preferred_tag("THE"), Some("DT"));
        assert_eq!(lex.preferred_tag("Run"), Some("VB"));
        // the fallback only lowercases; it never capitalizes
        assert_eq!(lex.preferred_tag("paris"), None);
        assert_eq!(lex.preferred_tag("Paris"), Some("NNP"));
    }

    #[test]
    fn test_contains() {
        let lex = sample();
        assert!(lex.contains("the"));
        assert!(lex.contains("The"));
        assert!(!lex.contains("dog"));
    }

    #[test]
    fn test_empty_candidates_kept_as_keys() {
        let lex = sample();
        assert_eq!(lex.len(), 4);
        assert!(lex.contains("ghost"));
        assert!(lex.contains("GHOST"));
        assert_eq!(lex.get("ghost"), Some(&[][..]));
        assert_eq!(lex.preferred_tag("ghost"), None);
    }

    #[test]
    fn test_empty_exact_entry_shadows_lowercase() {
        let lex = Lexicon::from_iter([("Apple", vec![]), ("apple", vec!["NN"])]);
        assert_eq!(lex.preferred_tag("Apple"), None);
        assert_eq!(lex.preferred_tag("APPLE"), Some("NN"));
    }

    #[test]
    fn test_deserialize() {
        let lex: Lexicon = serde_json::from_str(r#"{"dog": ["NN"], "gone": []}"#).unwrap();
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.preferred_tag("Dog"), Some("NN"));
        assert!(lex.contains("gone"));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{"quickly": ["RB"]}"#;
        let lex = Lexicon::from_reader(&json[..]).unwrap();
        assert_eq!(lex.preferred_tag("quickly"), Some("RB"));
    }
}
