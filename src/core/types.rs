use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The cipher families the cascade knows how to break.
///
/// Declaration order is cascade order: simplest explanation first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CipherMethod {
    Caesar,
    RailFence,
    Vigenere,
}

impl CipherMethod {
    /// All methods in the fixed priority order of the cascade
    pub const CASCADE: [CipherMethod; 3] = [
        CipherMethod::Caesar,
        CipherMethod::RailFence,
        CipherMethod::Vigenere,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CipherMethod::Caesar => "Caesar",
            CipherMethod::RailFence => "RailFence",
            CipherMethod::Vigenere => "Vigenere",
        }
    }

    /// Substitution ciphers keep word boundaries where they were;
    /// transposition ciphers move them.
    pub fn preserves_spaces(&self) -> bool {
        matches!(self, CipherMethod::Caesar | CipherMethod::Vigenere)
    }
}

impl fmt::Display for CipherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherMethod {
    type Err = String;

    /// Lenient parse: case-insensitive, ignores separators and accents
    /// so "rail_fence", "Rail Fence" and "vigenère" all resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| c.is_alphabetic())
            .map(|c| match c {
                'è' | 'È' | 'é' | 'É' => 'e',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match folded.as_str() {
            "caesar" => Ok(CipherMethod::Caesar),
            "railfence" | "rail" => Ok(CipherMethod::RailFence),
            "vigenere" => Ok(CipherMethod::Vigenere),
            _ => Err(format!("unknown cipher method: {}", s)),
        }
    }
}

/// Method-specific key, discriminated by cipher family.
///
/// Serializes to the `params` object of a resolution:
/// `{"shift": n}`, `{"rails": n}` or `{"key": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CipherKey {
    Shift { shift: u8 },
    Rails { rails: usize },
    Keyword { key: String },
}

impl CipherKey {
    pub fn shift(shift: u8) -> Self {
        Self::Shift { shift }
    }

    pub fn rails(rails: usize) -> Self {
        Self::Rails { rails }
    }

    pub fn keyword(key: impl Into<String>) -> Self {
        Self::Keyword { key: key.into() }
    }

    /// The cipher family this key belongs to
    pub fn method(&self) -> CipherMethod {
        match self {
            CipherKey::Shift { .. } => CipherMethod::Caesar,
            CipherKey::Rails { .. } => CipherMethod::RailFence,
            CipherKey::Keyword { .. } => CipherMethod::Vigenere,
        }
    }

    /// Whether the key is within the range its family allows
    pub fn is_well_formed(&self) -> bool {
        match self {
            CipherKey::Shift { shift } => *shift < 26,
            CipherKey::Rails { rails } => *rails >= 2,
            CipherKey::Keyword { key } => {
                !key.is_empty() && key.chars().all(|c| c.is_ascii_alphabetic())
            }
        }
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKey::Shift { shift } => write!(f, "{}", shift),
            CipherKey::Rails { rails } => write!(f, "{}", rails),
            CipherKey::Keyword { key } => f.write_str(key),
        }
    }
}

/// Dictionary verdict a strategy computed for its own candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorValidation {
    /// Percentage of valid words, nominally in [0, 100]
    pub percentage: f64,
    #[serde(default)]
    pub invalid_words: Vec<String>,
    #[serde(default)]
    pub valid_words: Option<usize>,
    #[serde(default)]
    pub total_words: Option<usize>,
}

impl CollaboratorValidation {
    pub fn from_percentage(percentage: f64) -> Self {
        Self {
            percentage,
            invalid_words: Vec::new(),
            valid_words: None,
            total_words: None,
        }
    }
}

/// The single best guess a strategy returns for a ciphertext.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyCandidate {
    pub key: CipherKey,
    pub text: String,
    pub raw_score: f64,
    pub validation: Option<CollaboratorValidation>,
}

impl StrategyCandidate {
    pub fn new(key: CipherKey, text: impl Into<String>, raw_score: f64) -> Self {
        Self {
            key,
            text: text.into(),
            raw_score,
            validation: None,
        }
    }

    pub fn with_validation(mut self, validation: CollaboratorValidation) -> Self {
        self.validation = Some(validation);
        self
    }
}
