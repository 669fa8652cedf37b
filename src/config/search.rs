use serde::{Deserialize, Serialize};

/// Search bounds for the built-in strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Largest rail count the rail fence strategy tries (default: 10)
    #[serde(default = "default_max_rails")]
    pub max_rails: usize,

    /// Longest Vigenère key length considered by statistical estimation (default: 12)
    #[serde(default = "default_max_key_length")]
    pub max_key_length: usize,

    /// How many of the best-scoring key lengths get a derived key (default: 3)
    #[serde(default = "default_key_length_candidates")]
    pub key_length_candidates: usize,

    /// Longest dictionary word tried as a Vigenère key (default: 12)
    #[serde(default = "default_max_dictionary_key_length")]
    pub max_dictionary_key_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_rails: default_max_rails(),
            max_key_length: default_max_key_length(),
            key_length_candidates: default_key_length_candidates(),
            max_dictionary_key_length: default_max_dictionary_key_length(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_rails < 2 {
            return Err(format!("max_rails must be at least 2, got {}", self.max_rails));
        }
        if self.max_key_length < 1 {
            return Err("max_key_length must be at least 1".to_string());
        }
        if self.key_length_candidates < 1 {
            return Err("key_length_candidates must be at least 1".to_string());
        }
        Ok(())
    }
}

fn default_max_rails() -> usize {
    10
}
fn default_max_key_length() -> usize {
    12
}
fn default_key_length_candidates() -> usize {
    3
}
fn default_max_dictionary_key_length() -> usize {
    12
}
