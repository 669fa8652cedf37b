use crate::core::types::CipherMethod;
use serde::{Deserialize, Serialize};

/// Confidence thresholds for the resolution cascade.
///
/// Only `global_confidence` gates the early exit. The per-method values are
/// advisory: they are reported alongside a result but never change which
/// candidate wins.
///
/// ```toml
/// [thresholds]
/// global_confidence = 0.9
/// caesar = 0.7
/// rail_fence = 0.65
/// vigenere = 0.5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Confidence at or above which the cascade stops early (default: 0.9)
    #[serde(default = "default_global_confidence")]
    pub global_confidence: f64,

    #[serde(default = "default_caesar_threshold")]
    pub caesar: f64,

    #[serde(default = "default_rail_fence_threshold")]
    pub rail_fence: f64,

    #[serde(default = "default_vigenere_threshold")]
    pub vigenere: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            global_confidence: default_global_confidence(),
            caesar: default_caesar_threshold(),
            rail_fence: default_rail_fence_threshold(),
            vigenere: default_vigenere_threshold(),
        }
    }
}

impl ThresholdsConfig {
    /// Advisory threshold for a single method
    pub fn advisory_for(&self, method: CipherMethod) -> f64 {
        match method {
            CipherMethod::Caesar => self.caesar,
            CipherMethod::RailFence => self.rail_fence,
            CipherMethod::Vigenere => self.vigenere,
        }
    }

    /// Whether a confidence is high enough to stop the cascade
    pub fn is_conclusive(&self, confidence: f64) -> bool {
        confidence >= self.global_confidence
    }

    // Pure function: Check if a threshold is a valid confidence value
    fn is_valid_threshold(value: f64) -> bool {
        (0.0..=1.0).contains(&value)
    }

    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("global_confidence", self.global_confidence),
            ("caesar", self.caesar),
            ("rail_fence", self.rail_fence),
            ("vigenere", self.vigenere),
        ];
        for (name, value) in checks {
            if !Self::is_valid_threshold(value) {
                return Err(format!(
                    "{} threshold must be between 0.0 and 1.0, got {}",
                    name, value
                ));
            }
        }
        Ok(())
    }
}

pub fn default_global_confidence() -> f64 {
    0.9
}
pub fn default_caesar_threshold() -> f64 {
    0.7
}
pub fn default_rail_fence_threshold() -> f64 {
    0.65
}
pub fn default_vigenere_threshold() -> f64 {
    0.5
}
