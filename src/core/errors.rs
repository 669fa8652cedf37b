//! Shared error types for the application

use crate::core::types::CipherMethod;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cipherid operations
#[derive(Debug, Error)]
pub enum Error {
    /// The ciphertext was missing or empty; no strategy was attempted
    #[error("Input error: {0}")]
    Input(String),

    /// Every strategy failed or produced nothing to rank
    #[error("No strategy produced a candidate (attempted: {})", format_methods(.attempted))]
    Exhausted { attempted: Vec<CipherMethod> },

    /// Dictionary resource errors
    #[error("Dictionary error: {message}")]
    Dictionary {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// Create a dictionary error with path context
    pub fn dictionary(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Dictionary {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether the caller supplied bad input (a 4xx-class failure at the boundary)
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

fn format_methods(methods: &[CipherMethod]) -> String {
    if methods.is_empty() {
        return "none".to_string();
    }
    methods
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

/// Failure of a single cipher strategy.
///
/// These never escape the cascade: the coordinator records them as
/// diagnostics and moves on to the next strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The strategy ran but could not complete its search
    #[error("{method} strategy failed: {message}")]
    Failed {
        method: CipherMethod,
        message: String,
    },

    /// The ciphertext gave the strategy nothing to work with
    #[error("{method} strategy produced no candidate: {reason}")]
    NoCandidate {
        method: CipherMethod,
        reason: String,
    },

    /// The strategy returned something the cascade cannot use
    #[error("{method} strategy returned an unusable result: {reason}")]
    Unusable {
        method: CipherMethod,
        reason: String,
    },
}

impl StrategyError {
    pub fn failed(method: CipherMethod, message: impl Into<String>) -> Self {
        Self::Failed {
            method,
            message: message.into(),
        }
    }

    pub fn no_candidate(method: CipherMethod, reason: impl Into<String>) -> Self {
        Self::NoCandidate {
            method,
            reason: reason.into(),
        }
    }

    pub fn unusable(method: CipherMethod, reason: impl Into<String>) -> Self {
        Self::Unusable {
            method,
            reason: reason.into(),
        }
    }

    /// The strategy that raised this error
    pub fn method(&self) -> CipherMethod {
        match self {
            Self::Failed { method, .. }
            | Self::NoCandidate { method, .. }
            | Self::Unusable { method, .. } => *method,
        }
    }
}
