//! Word-validity scoring of candidate plaintexts.
//!
//! Confidence is the fraction of whitespace-separated tokens that are
//! dictionary words once punctuation and digits are stripped. The
//! validator is fail-soft: text with no usable tokens scores zero rather
//! than erroring.

use crate::core::types::CollaboratorValidation;
use crate::dictionary::{normalize_word, WordDictionary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of validating a text against the dictionary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Fraction of valid tokens in [0, 1]
    pub confidence: f64,
    pub valid_word_count: usize,
    pub total_word_count: usize,
    /// Tokens that failed membership, in encounter order
    pub invalid_words: Vec<String>,
}

impl ValidationReport {
    /// Report for text with no usable tokens
    pub fn empty() -> Self {
        Self::default()
    }

    /// Confidence expressed as a percentage
    pub fn percentage(&self) -> f64 {
        self.confidence * 100.0
    }

    /// Adopt a verdict a strategy already computed for its own text.
    ///
    /// The percentage becomes the confidence directly (clamped, non-finite
    /// reads as 0). Missing counts are derived from the text's tokens.
    pub fn from_collaborator(validation: CollaboratorValidation, text: &str) -> Self {
        let confidence = if validation.percentage.is_finite() && validation.percentage > 0.0 {
            (validation.percentage / 100.0).min(1.0)
        } else {
            0.0
        };
        let total = validation
            .total_words
            .unwrap_or_else(|| tokenize(text).count());
        let valid = validation
            .valid_words
            .unwrap_or_else(|| total.saturating_sub(validation.invalid_words.len()))
            .min(total);

        Self {
            confidence,
            valid_word_count: valid,
            total_word_count: total,
            invalid_words: validation.invalid_words,
        }
    }
}

/// Split on whitespace, keep letters only, uppercase, drop empties.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|token| !token.is_empty())
}

/// Scores text by dictionary membership of its tokens.
#[derive(Debug, Clone)]
pub struct TextValidator {
    dictionary: Arc<WordDictionary>,
}

impl TextValidator {
    pub fn new(dictionary: Arc<WordDictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &WordDictionary {
        &self.dictionary
    }

    pub fn validate(&self, text: &str) -> ValidationReport {
        let mut total = 0usize;
        let mut valid = 0usize;
        let mut invalid_words = Vec::new();

        for token in tokenize(text) {
            total += 1;
            if self.dictionary.contains(&token) {
                valid += 1;
            } else {
                invalid_words.push(token);
            }
        }

        if total == 0 {
            return ValidationReport::empty();
        }

        ValidationReport {
            confidence: (valid as f64 / total as f64).clamp(0.0, 1.0),
            valid_word_count: valid,
            total_word_count: total,
            invalid_words,
        }
    }
}
