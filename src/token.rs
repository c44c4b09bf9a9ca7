use serde::Serialize;

/// A word paired with its final tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedWord<'a> {
    pub word: &'a str,
    pub tag: String,
}

impl<'a> TaggedWord<'a> {
    pub fn new(word: &'a str, tag: String) -> Self {
        Self { word, tag }
    }

    pub fn into_pair(self) -> (&'a str, String) {
        (self.word, self.tag)
    }
}
