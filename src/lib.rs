pub mod error;
pub mod data;
pub mod lexicon;
pub mod tags;
pub mod token;
pub mod initial;
pub mod rules;
pub mod tagger;

pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use tagger::PosTagger;
pub use token::TaggedWord;
