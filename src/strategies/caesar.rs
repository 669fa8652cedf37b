use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::fitness::{candidate_score, shift_back};
use crate::core::errors::StrategyError;
use crate::core::traits::CipherStrategy;
use crate::core::types::{CipherKey, CipherMethod, StrategyCandidate};
use crate::dictionary::WordDictionary;
use crate::validation::TextValidator;

/// Exhaustive Caesar search over all 26 shifts
#[derive(Debug, Clone)]
pub struct CaesarStrategy {
    validator: TextValidator,
}

impl CaesarStrategy {
    pub fn new(dictionary: Arc<WordDictionary>) -> Self {
        Self {
            validator: TextValidator::new(dictionary),
        }
    }

    /// Undo a Caesar encryption that used `shift`
    pub fn decrypt(ciphertext: &str, shift: u8) -> String {
        ciphertext.chars().map(|c| shift_back(c, shift)).collect()
    }

    /// Best candidate over shifts 0..=25; ties go to the smallest shift.
    pub fn break_caesar(&self, ciphertext: &str) -> Result<StrategyCandidate, StrategyError> {
        if !ciphertext.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(StrategyError::no_candidate(
                CipherMethod::Caesar,
                "ciphertext contains no letters",
            ));
        }

        let mut best: Option<(u8, String, f64)> = None;
        for shift in 0..26u8 {
            let text = Self::decrypt(ciphertext, shift);
            let score = candidate_score(&text, &self.validator);
            if best.as_ref().is_none_or(|(_, _, top)| score > *top) {
                best = Some((shift, text, score));
            }
        }

        let (shift, text, score) = best.ok_or_else(|| {
            StrategyError::failed(CipherMethod::Caesar, "no shift was evaluated")
        })?;
        debug!(shift, score, "Caesar search complete");
        Ok(StrategyCandidate::new(CipherKey::shift(shift), text, score))
    }
}

#[async_trait]
impl CipherStrategy for CaesarStrategy {
    fn method(&self) -> CipherMethod {
        CipherMethod::Caesar
    }

    async fn break_cipher(&self, ciphertext: &str) -> Result<StrategyCandidate, StrategyError> {
        self.break_caesar(ciphertext)
    }

    fn known_words(&self) -> Vec<String> {
        self.validator
            .dictionary()
            .words()
            .map(str::to_string)
            .collect()
    }
}
