use serde::Serialize;

use crate::core::types::{CipherKey, CipherMethod, StrategyCandidate};
use crate::scoring::{NormalizeOptions, ScoreNormalizer};
use crate::validation::ValidationReport;

/// Word-level detail behind a candidate's confidence
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMetadata {
    pub valid_word_count: usize,
    pub total_word_count: usize,
    pub invalid_words: Vec<String>,
}

/// One strategy's validated guess. Built once per successful strategy
/// run and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResult {
    pub method: CipherMethod,
    pub key: CipherKey,
    pub decrypted_text: String,
    pub raw_score: f64,
    /// Word-validity confidence in [0, 1]
    pub confidence: f64,
    pub metadata: CandidateMetadata,
}

impl CandidateResult {
    pub fn new(method: CipherMethod, candidate: StrategyCandidate, report: ValidationReport) -> Self {
        Self {
            method,
            key: candidate.key,
            decrypted_text: candidate.text,
            raw_score: candidate.raw_score,
            confidence: clamp_confidence(report.confidence),
            metadata: CandidateMetadata {
                valid_word_count: report.valid_word_count,
                total_word_count: report.total_word_count,
                invalid_words: report.invalid_words,
            },
        }
    }

    /// Blended presentation score, distinct from confidence
    pub fn presentation_score(&self, normalizer: &ScoreNormalizer) -> f64 {
        let options = NormalizeOptions::default()
            .with_valid_word_percentage(self.confidence * 100.0)
            .with_preserved_spaces(self.method.preserves_spaces());
        normalizer.normalize_method(self.method, self.raw_score, options)
    }
}

/// Clamp into [0, 1]; NaN and negative zero both read as `+0.0`
fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() || confidence <= 0.0 {
        0.0
    } else {
        confidence.min(1.0)
    }
}

/// Final answer of a resolution.
///
/// `success` is true only when the candidate cleared the global
/// confidence threshold; otherwise the candidate is the best of
/// everything the cascade collected.
#[derive(Debug, Clone, PartialEq)]
pub struct DecryptionOutcome {
    pub success: bool,
    pub candidate: CandidateResult,
    /// Whether the winning method's advisory threshold was met
    pub advisory_threshold_met: bool,
}

impl DecryptionOutcome {
    pub fn method(&self) -> CipherMethod {
        self.candidate.method
    }

    pub fn decrypted(&self) -> &str {
        &self.candidate.decrypted_text
    }

    pub fn confidence(&self) -> f64 {
        self.candidate.confidence
    }

    /// Method-specific parameters (shift, rail count or keyword)
    pub fn params(&self) -> &CipherKey {
        &self.candidate.key
    }

    pub fn details(&self) -> &CandidateMetadata {
        &self.candidate.metadata
    }
}
