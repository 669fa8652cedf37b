//! Scoring configuration for presentation scores
//!
//! Raw strategy scores are not comparable across methods, so each method
//! carries a weight applied before the score is clamped into [0, 1].

use crate::core::types::CipherMethod;
use serde::{Deserialize, Serialize};

/// Per-method score weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_caesar_weight")]
    pub caesar: f64,

    #[serde(default = "default_rail_fence_weight")]
    pub rail_fence: f64,

    #[serde(default = "default_vigenere_weight")]
    pub vigenere: f64,

    /// Weight for methods the cascade does not recognize
    #[serde(default = "default_fallback_weight")]
    pub default: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            caesar: default_caesar_weight(),
            rail_fence: default_rail_fence_weight(),
            vigenere: default_vigenere_weight(),
            default: default_fallback_weight(),
        }
    }
}

impl ScoreWeights {
    pub fn weight_for_method(&self, method: CipherMethod) -> f64 {
        match method {
            CipherMethod::Caesar => self.caesar,
            CipherMethod::RailFence => self.rail_fence,
            CipherMethod::Vigenere => self.vigenere,
        }
    }

    /// Weight for a method given by name; unrecognized names get the default
    pub fn weight_for(&self, method: &str) -> f64 {
        method
            .parse::<CipherMethod>()
            .map(|m| self.weight_for_method(m))
            .unwrap_or(self.default)
    }

    // Pure function: Check if a weight is usable
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }

    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("caesar", self.caesar),
            ("rail_fence", self.rail_fence),
            ("vigenere", self.vigenere),
            ("default", self.default),
        ];
        for (name, weight) in checks {
            if !Self::is_valid_weight(weight) {
                return Err(format!(
                    "{} weight must be a non-negative number, got {}",
                    name, weight
                ));
            }
        }
        Ok(())
    }
}

pub fn default_caesar_weight() -> f64 {
    1.2
}
pub fn default_rail_fence_weight() -> f64 {
    0.8
}
pub fn default_vigenere_weight() -> f64 {
    0.7
}
pub fn default_fallback_weight() -> f64 {
    1.0
}
