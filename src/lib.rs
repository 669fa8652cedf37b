//! Cipher identification by cascading resolution.
//!
//! A [`Coordinator`] tries Caesar, then Rail Fence, then Vigenère, validates
//! each candidate plaintext against a [`WordDictionary`], and stops at the
//! first one that is convincingly English. When none is, the most
//! plausible candidate is returned with `success: false`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod io;
pub mod observability;
pub mod resolution;
pub mod scoring;
pub mod strategies;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    CipherKey, CipherMethod, CipherStrategy, CollaboratorValidation, Error, Result, ResultExt,
    StrategyCandidate, StrategyError,
};

pub use crate::config::{CipherIdConfig, ScoreWeights, SearchConfig, ThresholdsConfig};
pub use crate::dictionary::{load_dictionary, WordDictionary};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::observability::{ResolutionEvent, ResolutionObserver, ResolutionState};
pub use crate::resolution::{CandidateResult, Coordinator, DecryptionOutcome};
pub use crate::scoring::{NormalizeOptions, ScoreNormalizer};
pub use crate::strategies::{CaesarStrategy, RailFenceStrategy, StrategySet, VigenereStrategy};
pub use crate::validation::{TextValidator, ValidationReport};
