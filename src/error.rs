use std::path::PathBuf;

/// Result type used by the fallible lexicon constructors.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building a [`Lexicon`](crate::Lexicon) from external data.
///
/// Tagging itself never fails; only loading can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The lexicon source was not a JSON object of `word -> [tag, ...]`.
    #[error("failed to parse lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The lexicon file could not be read.
    #[error("failed to read lexicon from '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
