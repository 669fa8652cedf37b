//! Core trait definitions for clean module boundaries
//!
//! This module contains the contract the resolution cascade consumes from
//! each cipher-breaking collaborator.

use crate::core::errors::StrategyError;
use crate::core::types::{CipherMethod, StrategyCandidate};
use async_trait::async_trait;

/// A cipher-breaking strategy.
///
/// Implementations must be a pure function of (ciphertext, configured
/// dictionary): the same input always yields the same candidate.
#[async_trait]
pub trait CipherStrategy: Send + Sync {
    /// The cipher family this strategy breaks
    fn method(&self) -> CipherMethod;

    /// Attempt to decrypt the ciphertext and return the single best candidate
    async fn break_cipher(&self, ciphertext: &str) -> Result<StrategyCandidate, StrategyError>;

    /// Words this strategy scores against, if it carries its own list
    fn known_words(&self) -> Vec<String> {
        Vec::new()
    }
}
