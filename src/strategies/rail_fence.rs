use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::fitness::candidate_score;
use crate::core::errors::StrategyError;
use crate::core::traits::CipherStrategy;
use crate::core::types::{CipherKey, CipherMethod, StrategyCandidate};
use crate::dictionary::WordDictionary;
use crate::validation::TextValidator;

/// Fewer characters than this cannot be laid across two rails meaningfully
const MIN_CIPHERTEXT_CHARS: usize = 3;

/// Rail index of every position in a zigzag of the given height
fn zigzag(len: usize, rails: usize) -> impl Iterator<Item = usize> {
    let cycle = 2 * (rails - 1);
    (0..len).map(move |i| {
        let phase = i % cycle;
        if phase < rails {
            phase
        } else {
            cycle - phase
        }
    })
}

/// Rail fence search over a bounded range of rail counts
#[derive(Debug, Clone)]
pub struct RailFenceStrategy {
    validator: TextValidator,
    max_rails: usize,
}

impl RailFenceStrategy {
    pub fn new(dictionary: Arc<WordDictionary>, max_rails: usize) -> Self {
        Self {
            validator: TextValidator::new(dictionary),
            max_rails: max_rails.max(2),
        }
    }

    /// Encrypt by writing the text in a zigzag and reading rail by rail
    pub fn encrypt(plaintext: &str, rails: usize) -> String {
        let chars: Vec<char> = plaintext.chars().collect();
        if rails < 2 || chars.len() <= 1 {
            return plaintext.to_string();
        }
        let mut lines = vec![String::new(); rails];
        for (c, rail) in chars.iter().zip(zigzag(chars.len(), rails)) {
            lines[rail].push(*c);
        }
        lines.concat()
    }

    /// Invert [`RailFenceStrategy::encrypt`]
    pub fn decrypt(ciphertext: &str, rails: usize) -> String {
        let chars: Vec<char> = ciphertext.chars().collect();
        if rails < 2 || chars.len() <= 1 {
            return ciphertext.to_string();
        }

        let pattern: Vec<usize> = zigzag(chars.len(), rails).collect();
        let mut lengths = vec![0usize; rails];
        for &rail in &pattern {
            lengths[rail] += 1;
        }

        let mut cursors = Vec::with_capacity(rails);
        let mut start = 0;
        for len in lengths {
            cursors.push(start);
            start += len;
        }

        pattern
            .into_iter()
            .map(|rail| {
                let c = chars[cursors[rail]];
                cursors[rail] += 1;
                c
            })
            .collect()
    }

    /// Best candidate over rails 2..=min(max_rails, len - 1); ties go to fewer rails.
    pub fn break_rail_fence(&self, ciphertext: &str) -> Result<StrategyCandidate, StrategyError> {
        let len = ciphertext.chars().count();
        if len < MIN_CIPHERTEXT_CHARS {
            return Err(StrategyError::no_candidate(
                CipherMethod::RailFence,
                format!("ciphertext has {} characters, need {}", len, MIN_CIPHERTEXT_CHARS),
            ));
        }

        let upper = self.max_rails.min(len - 1);
        let mut best: Option<(usize, String, f64)> = None;
        for rails in 2..=upper {
            let text = Self::decrypt(ciphertext, rails);
            let score = candidate_score(&text, &self.validator);
            if best.as_ref().is_none_or(|(_, _, top)| score > *top) {
                best = Some((rails, text, score));
            }
        }

        let (rails, text, score) = best.ok_or_else(|| {
            StrategyError::failed(CipherMethod::RailFence, "no rail count was evaluated")
        })?;
        debug!(rails, score, "Rail fence search complete");
        Ok(StrategyCandidate::new(CipherKey::rails(rails), text, score))
    }
}

#[async_trait]
impl CipherStrategy for RailFenceStrategy {
    fn method(&self) -> CipherMethod {
        CipherMethod::RailFence
    }

    async fn break_cipher(&self, ciphertext: &str) -> Result<StrategyCandidate, StrategyError> {
        self.break_rail_fence(ciphertext)
    }

    fn known_words(&self) -> Vec<String> {
        self.validator
            .dictionary()
            .words()
            .map(str::to_string)
            .collect()
    }
}
