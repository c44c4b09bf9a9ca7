//! Penn Treebank style tags read or written by the tagger.
//!
//! The vocabulary is open: a lexicon may carry any tag string, and it is passed
//! through untouched unless a rule rewrites it.

pub const CD: &str = "CD";
pub const DT: &str = "DT";
pub const JJ: &str = "JJ";
pub const NN: &str = "NN";
pub const NNP: &str = "NNP";
pub const NNS: &str = "NNS";
pub const POS: &str = "POS";
pub const PRP: &str = "PRP";
pub const RB: &str = "RB";
pub const URL: &str = "URL";
pub const VB: &str = "VB";
pub const VBD: &str = "VBD";
pub const VBG: &str = "VBG";
pub const VBN: &str = "VBN";
pub const VBP: &str = "VBP";
pub const VBZ: &str = "VBZ";

/// Tag given to any word the lexicon does not know.
pub const DEFAULT: &str = NN;

/// Nouns of any kind (`NN`, `NNS`, `NNP`, ...) and anything else starting with `N`.
pub fn is_noun_like(tag: &str) -> bool {
    tag.starts_with('N')
}

/// Common and proper nouns: any tag starting with `NN`.
pub fn is_noun(tag: &str) -> bool {
    tag.starts_with(NN)
}

pub fn is_adjective(tag: &str) -> bool {
    tag.starts_with(JJ)
}
