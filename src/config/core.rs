use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::scoring::ScoreWeights;
use super::search::SearchConfig;
use super::thresholds::ThresholdsConfig;

/// Root configuration structure for cipherid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CipherIdConfig {
    /// Confidence thresholds
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    /// Per-method presentation score weights
    #[serde(default)]
    pub weights: ScoreWeights,

    /// Strategy search bounds
    #[serde(default)]
    pub search: SearchConfig,

    /// Reference dictionary location
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DictionaryConfig {
    /// JSON document with a `words` array; the built-in list is used when absent
    #[serde(default)]
    pub path: Option<PathBuf>,
}
