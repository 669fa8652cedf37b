use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::WordDictionary;
use crate::core::errors::{Error, Result};

/// On-disk dictionary document: `{ "words": ["...", ...] }`.
///
/// Unknown fields are tolerated so richer documents can be reused.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryDocument {
    pub words: Vec<String>,
}

/// Pure function to read file contents
fn read_dictionary_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse a dictionary document
pub fn parse_dictionary(contents: &str) -> Result<WordDictionary> {
    let document: DictionaryDocument = serde_json::from_str(contents)?;
    Ok(WordDictionary::new(document.words))
}

/// Read and parse a dictionary file, reporting every failure.
pub fn read_dictionary(path: &Path) -> Result<WordDictionary> {
    let contents = read_dictionary_file(path)
        .map_err(|e| Error::dictionary(format!("failed to read: {}", e), path))?;
    parse_dictionary(&contents)
        .map_err(|e| Error::dictionary(format!("malformed document: {}", e), path))
}

/// Load a dictionary, treating any failure as "no dictionary".
///
/// Callers fall back to the union of the strategies' own word lists when
/// this returns `None`.
pub fn load_dictionary(path: &Path) -> Option<WordDictionary> {
    match read_dictionary(path) {
        Ok(dictionary) => {
            debug!(
                path = %path.display(),
                words = dictionary.len(),
                "Loaded dictionary"
            );
            Some(dictionary)
        }
        Err(e) => {
            warn!("{}. Falling back to strategy word lists.", e);
            None
        }
    }
}
