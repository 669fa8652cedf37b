use crate::config::ScoreWeights;
use crate::core::types::CipherMethod;

/// Raw strategy scores land roughly in [0, 1000]; dividing by this maps
/// them onto [0, 1] before weighting.
pub const RAW_SCORE_SCALE: f64 = 1000.0;

/// Multiplier floor applied at 0% valid words
const WORD_BONUS_FLOOR: f64 = 0.3;

/// Bonus for ciphers that keep word boundaries in place
const SPACE_PRESERVATION_BONUS: f64 = 1.2;

/// Optional adjustments applied during normalization
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizeOptions {
    /// Percentage of valid words in [0, 100]; out-of-range values are clamped
    pub valid_word_percentage: Option<f64>,
    pub preserves_spaces: bool,
}

impl NormalizeOptions {
    pub fn with_valid_word_percentage(mut self, percentage: f64) -> Self {
        self.valid_word_percentage = Some(percentage);
        self
    }

    pub fn with_preserved_spaces(mut self, preserves_spaces: bool) -> Self {
        self.preserves_spaces = preserves_spaces;
        self
    }
}

/// Maps raw, unit-less strategy scores onto a bounded presentation score.
///
/// This is distinct from confidence: confidence is the word-validity
/// fraction the cascade gates on, while the normalized score blends the
/// raw score with method weighting and bonuses for display.
#[derive(Debug, Clone, Default)]
pub struct ScoreNormalizer {
    weights: ScoreWeights,
}

impl ScoreNormalizer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Normalize a raw score for a method given by name.
    ///
    /// Never fails: a non-finite raw score normalizes to 0.
    pub fn normalize(&self, method: &str, raw_score: f64, options: NormalizeOptions) -> f64 {
        self.normalize_weighted(self.weights.weight_for(method), raw_score, options)
    }

    /// Normalize a raw score for a known method
    pub fn normalize_method(
        &self,
        method: CipherMethod,
        raw_score: f64,
        options: NormalizeOptions,
    ) -> f64 {
        self.normalize_weighted(self.weights.weight_for_method(method), raw_score, options)
    }

    fn normalize_weighted(&self, weight: f64, raw_score: f64, options: NormalizeOptions) -> f64 {
        if !raw_score.is_finite() {
            return 0.0;
        }

        let mut score = raw_score.max(0.0) / RAW_SCORE_SCALE;
        score *= weight;

        if let Some(percentage) = options.valid_word_percentage {
            score *= word_bonus(percentage);
        }

        if options.preserves_spaces {
            score *= SPACE_PRESERVATION_BONUS;
        }

        clamp_unit(score)
    }
}

/// Blended multiplier in [0.3, 1.0] rewarding word validity
fn word_bonus(percentage: f64) -> f64 {
    let word_score = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    };
    WORD_BONUS_FLOOR + (1.0 - WORD_BONUS_FLOOR) * word_score
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
