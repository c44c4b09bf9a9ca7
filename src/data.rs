use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Raw lexicon layout: each word maps to its candidate tags, preferred first.
pub type RawLexicon = HashMap<String, Vec<String>>;

pub fn load_json(data: &str) -> Result<RawLexicon> {
    Ok(serde_json::from_str(data)?)
}

pub fn load_reader<R: Read>(reader: R) -> Result<RawLexicon> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_path(path: &Path) -> Result<RawLexicon> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(BufReader::new(file))
}
