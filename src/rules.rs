//! Second stage: one left-to-right pass of contextual rewrite rules.
//!
//! At index `i` the rules see the tags already rewritten at `< i` and the
//! initial tag at `i + 1`. Three exclusive cases are tried first (the `'s`
//! clitic, `like` after a pronoun, a capitalized word mid-sentence); only when
//! none applies does the ordered list of surface-form rules run. Some of those
//! rules read the tag as it stood when the list started (`snapshot`), the rest
//! read the live tag as earlier rules in the list left it.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::tags::{self, is_adjective, is_noun, is_noun_like};

/// Two or more letters right after a dot: `example.com`, `index.html`.
static URL_AFTER_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[a-zA-Z]{2}").expect("URL pattern is valid"));

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]*\.[0-9]+").expect("decimal pattern is valid"));

/// Longest numeric prefix after optional leading whitespace.
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("float prefix pattern is valid")
});

/// Parses the numeric prefix of `s`, ignoring whatever trails it.
///
/// `"5.2"`, `"3rd"` and `"1e3x"` all yield numbers; `"abc"` and `"."` yield `None`.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let m = FLOAT_PREFIX.find(s.trim_start())?;
    m.as_str().parse::<f64>().ok()
}

fn is_nonzero_number(word: &str) -> bool {
    parse_float_prefix(word).is_some_and(|v| v != 0.0)
}

fn starts_with_upper(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_uppercase())
}

fn starts_with_lower(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_lowercase())
}

fn rewrite(tags: &mut [String], i: usize, word: &str, tag: &str, rule: &'static str) {
    if tags[i] != tag {
        trace!(index = i, word, from = %tags[i], to = tag, rule, "rewrite");
        tags[i] = tag.to_string();
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Rewrites `initial` in place, one index at a time, and returns it.
    ///
    /// # Panics
    ///
    /// If `words` and `initial` differ in length.
    pub fn transform<S: AsRef<str>>(&self, words: &[S], initial: Vec<String>) -> Vec<String> {
        assert_eq!(
            words.len(),
            initial.len(),
            "every word needs exactly one initial tag"
        );
        let mut tags = initial;
        let n = words.len();

        for i in 0..n {
            let word = words[i].as_ref();
            if i > 0 && word == "'s" && i < n - 1 {
                // 's before a gerund is "is", otherwise possessive
                let tag = if tags[i + 1] == tags::VBG {
                    tags::VBZ
                } else {
                    tags::POS
                };
                rewrite(&mut tags, i, word, tag, "clitic_s");
            } else if i > 0 && word.to_lowercase() == "like" && tags[i - 1] == tags::PRP {
                rewrite(&mut tags, i, word, tags::VB, "pronoun_like");
            } else if i > 0 && starts_with_upper(word) {
                rewrite(&mut tags, i, word, tags::NNP, "capitalized");
            } else {
                self.apply_surface_rules(words, &mut tags, i);
            }
        }
        tags
    }

    fn apply_surface_rules<S: AsRef<str>>(&self, words: &[S], tags: &mut [String], i: usize) {
        let word = words[i].as_ref();
        let snapshot = tags[i].clone();

        // {DT | JJ*} followed by a verb form is a noun
        if i > 0
            && (tags[i - 1] == tags::DT || is_adjective(&tags[i - 1]))
            && [tags::VBD, tags::VBP, tags::VB].contains(&snapshot.as_str())
        {
            rewrite(tags, i, word, tags::NN, "determiner_verb");
        }

        if is_noun_like(&snapshot) {
            if word.contains('.') {
                let tag = if URL_AFTER_DOT.is_match(word) {
                    tags::URL
                } else if DECIMAL.is_match(word) {
                    tags::CD
                } else {
                    tags::NN
                };
                rewrite(tags, i, word, tag, "dotted");
            }
            if is_nonzero_number(word) {
                rewrite(tags, i, word, tags::CD, "number");
            }
        }

        if is_noun_like(&tags[i]) && word.ends_with("ed") && starts_with_lower(word) {
            rewrite(tags, i, word, tags::VBN, "past_participle");
        }

        if is_noun(&tags[i]) && word.ends_with("ses") {
            rewrite(tags, i, word, tags::NNS, "plural_ses");
        }

        // any tag; the length check keeps "fly" and "sly" out
        if word.ends_with("ly") && word.chars().count() > 3 {
            rewrite(tags, i, word, tags::RB, "adverb_ly");
        }

        if is_noun(&tags[i]) && snapshot.ends_with("al") {
            rewrite(tags, i, word, tags::JJ, "adjective_al");
        }

        if i > 0 && is_noun(&tags[i]) && words[i - 1].as_ref().to_lowercase() == "would" {
            rewrite(tags, i, word, tags::VB, "after_would");
        }

        if i > 0 && is_noun(&tags[i]) && (tags[i - 1] == tags::PRP || is_noun(&tags[i - 1])) {
            rewrite(tags, i, word, tags::VB, "after_pronoun_or_noun");
        }

        if tags[i] == tags::NN && word.ends_with('s') && !word.to_lowercase().ends_with("ous") {
            rewrite(tags, i, word, tags::NNS, "plural_s");
        }
    }
}
