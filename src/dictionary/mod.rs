//! Reference word list shared by the validator and the strategies.
//!
//! A [`WordDictionary`] is built once and never mutated afterwards, so a
//! single `Arc<WordDictionary>` can back any number of concurrent
//! resolutions without locking.

mod common;
pub mod loader;

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

pub use loader::{load_dictionary, read_dictionary, DictionaryDocument};

static COMMON_ENGLISH: Lazy<Arc<WordDictionary>> =
    Lazy::new(|| Arc::new(WordDictionary::new(common::COMMON_ENGLISH_WORDS)));

/// Immutable, case-normalized set of known words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDictionary {
    words: HashSet<String>,
}

impl WordDictionary {
    /// Build a dictionary from raw entries.
    ///
    /// Entries are stripped of non-alphabetic characters and uppercased;
    /// entries that end up empty are dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .map(|entry| normalize_word(entry.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Built-in list of frequent English words
    pub fn common_english() -> Arc<WordDictionary> {
        Arc::clone(&COMMON_ENGLISH)
    }

    /// Merge several word lists into one dictionary
    pub fn union<I, S>(lists: impl IntoIterator<Item = I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(lists.into_iter().flatten())
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().all(|c| c.is_ascii_uppercase()) {
            return self.words.contains(word);
        }
        self.words.contains(&normalize_word(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored (uppercase) words in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Stored words in sorted order, for deterministic iteration
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words().collect();
        words.sort_unstable();
        words
    }
}

/// Strip everything but letters and uppercase the remainder
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}
