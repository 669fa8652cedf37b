use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, debug_span, Instrument};

use super::fitness::{candidate_score, chi_squared};
use crate::config::SearchConfig;
use crate::core::errors::StrategyError;
use crate::core::traits::CipherStrategy;
use crate::core::types::{CipherKey, CipherMethod, CollaboratorValidation, StrategyCandidate};
use crate::dictionary::WordDictionary;
use crate::validation::TextValidator;

/// Dictionary keys tried between cooperative yields
const KEYS_PER_YIELD: usize = 256;

/// Shortest dictionary word tried as a key
const MIN_DICTIONARY_KEY_LENGTH: usize = 2;

/// Two-stage Vigenère search: statistical key-length estimation, then a
/// dictionary attack using every suitable word as a key.
#[derive(Debug, Clone)]
pub struct VigenereStrategy {
    validator: TextValidator,
    search: SearchConfig,
}

impl VigenereStrategy {
    pub fn new(dictionary: Arc<WordDictionary>, search: SearchConfig) -> Self {
        Self {
            validator: TextValidator::new(dictionary),
            search,
        }
    }

    /// Decrypt with a repeating key; the key only advances on letters.
    ///
    /// Non-letter key characters are ignored; an empty key leaves the text unchanged.
    pub fn decrypt(ciphertext: &str, key: &str) -> String {
        apply_key(ciphertext, key, |c, k| (c + 26 - k) % 26)
    }

    pub fn encrypt(plaintext: &str, key: &str) -> String {
        apply_key(plaintext, key, |p, k| (p + k) % 26)
    }

    pub async fn break_vigenere(&self, ciphertext: &str) -> Result<StrategyCandidate, StrategyError> {
        let letters = letter_indices(ciphertext);
        if letters.len() < 2 {
            return Err(StrategyError::no_candidate(
                CipherMethod::Vigenere,
                "ciphertext needs at least two letters",
            ));
        }

        let mut best: Option<(String, String, f64)> = None;
        let consider = |key: String, best: &mut Option<(String, String, f64)>| {
            let text = Self::decrypt(ciphertext, &key);
            let score = candidate_score(&text, &self.validator);
            if best.as_ref().is_none_or(|(_, _, top)| score > *top) {
                *best = Some((key, text, score));
            }
        };

        let lengths = self.estimate_key_lengths(&letters);
        debug!(?lengths, "Estimated key lengths");
        for length in lengths {
            consider(shortest_period(&derive_key(&letters, length)), &mut best);
        }

        tokio::task::yield_now().await;

        let dictionary_keys = self.dictionary_keys();
        debug!(keys = dictionary_keys.len(), "Starting dictionary attack");
        for (i, key) in dictionary_keys.into_iter().enumerate() {
            if i > 0 && i % KEYS_PER_YIELD == 0 {
                tokio::task::yield_now().await;
            }
            consider(key, &mut best);
        }

        let (key, text, score) = best.ok_or_else(|| {
            StrategyError::no_candidate(CipherMethod::Vigenere, "no key could be evaluated")
        })?;

        let report = self.validator.validate(&text);
        let validation = CollaboratorValidation {
            percentage: report.percentage(),
            invalid_words: report.invalid_words,
            valid_words: Some(report.valid_word_count),
            total_words: Some(report.total_word_count),
        };

        debug!(%key, score, "Vigenere search complete");
        Ok(StrategyCandidate::new(CipherKey::keyword(key), text, score).with_validation(validation))
    }

    /// Key lengths ranked by average index of coincidence, best first.
    ///
    /// Only lengths that leave at least two letters per column are ranked.
    fn estimate_key_lengths(&self, letters: &[u8]) -> Vec<usize> {
        let longest = self.search.max_key_length.min(letters.len() / 2).max(1);
        let mut ranked: Vec<(usize, f64)> = (1..=longest)
            .map(|length| (length, average_coincidence(letters, length)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
            .into_iter()
            .take(self.search.key_length_candidates)
            .map(|(length, _)| length)
            .collect()
    }

    /// Dictionary words usable as keys, in sorted order
    fn dictionary_keys(&self) -> Vec<String> {
        self.validator
            .dictionary()
            .sorted_words()
            .into_iter()
            .filter(|word| {
                (MIN_DICTIONARY_KEY_LENGTH..=self.search.max_dictionary_key_length)
                    .contains(&word.len())
                    && word.chars().all(|c| c.is_ascii_alphabetic())
            })
            .map(str::to_string)
            .collect()
    }
}

#[async_trait]
impl CipherStrategy for VigenereStrategy {
    fn method(&self) -> CipherMethod {
        CipherMethod::Vigenere
    }

    async fn break_cipher(&self, ciphertext: &str) -> Result<StrategyCandidate, StrategyError> {
        self.break_vigenere(ciphertext)
            .instrument(debug_span!("vigenere_search"))
            .await
    }

    fn known_words(&self) -> Vec<String> {
        self.validator
            .dictionary()
            .words()
            .map(str::to_string)
            .collect()
    }
}

fn apply_key(text: &str, key: &str, op: impl Fn(u8, u8) -> u8) -> String {
    let shifts: Vec<u8> = key
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase() as u8 - b'A')
        .collect();
    if shifts.is_empty() {
        return text.to_string();
    }

    let mut position = 0usize;
    text.chars()
        .map(|c| {
            let base = if c.is_ascii_uppercase() {
                b'A'
            } else if c.is_ascii_lowercase() {
                b'a'
            } else {
                return c;
            };
            let shifted = op(c as u8 - base, shifts[position % shifts.len()]);
            position += 1;
            (shifted + base) as char
        })
        .collect()
}

/// Letters of the text as 0..26 indices, in order
fn letter_indices(text: &str) -> Vec<u8> {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase() as u8 - b'A')
        .collect()
}

fn column_counts(letters: &[u8], length: usize, column: usize) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for &letter in letters.iter().skip(column).step_by(length) {
        counts[letter as usize] += 1;
    }
    counts
}

/// Mean index of coincidence over the columns of a key length
fn average_coincidence(letters: &[u8], length: usize) -> f64 {
    let total: f64 = (0..length)
        .map(|column| {
            let counts = column_counts(letters, length, column);
            let n: usize = counts.iter().sum();
            if n < 2 {
                return 0.0;
            }
            let pairs: usize = counts.iter().map(|&c| c * c.saturating_sub(1)).sum();
            pairs as f64 / (n * (n - 1)) as f64
        })
        .sum();
    total / length as f64
}

/// Per-column shift minimizing chi-squared against English
fn derive_key(letters: &[u8], length: usize) -> String {
    (0..length)
        .map(|column| {
            let counts = column_counts(letters, length, column);
            let shift = (0..26u8)
                .min_by(|&a, &b| {
                    chi_squared(&rotate(&counts, a)).total_cmp(&chi_squared(&rotate(&counts, b)))
                })
                .unwrap_or(0);
            (b'A' + shift) as char
        })
        .collect()
}

/// Collapse a key that repeats a shorter unit ("ABAB" -> "AB")
fn shortest_period(key: &str) -> String {
    let bytes = key.as_bytes();
    (1..=bytes.len())
        .find(|&period| {
            bytes.len() % period == 0 && bytes.chunks(period).all(|chunk| chunk == &bytes[..period])
        })
        .map(|period| key[..period].to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Counts as they would be after shifting every letter back by `shift`
fn rotate(counts: &[usize; 26], shift: u8) -> [usize; 26] {
    let mut rotated = [0usize; 26];
    for (i, &count) in counts.iter().enumerate() {
        rotated[(i + 26 - shift as usize) % 26] = count;
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> VigenereStrategy {
        VigenereStrategy::new(WordDictionary::common_english(), SearchConfig::default())
    }

    #[test]
    fn test_classic_example() {
        assert_eq!(
            VigenereStrategy::encrypt("ATTACKATDAWN", "LEMON"),
            "LXFOPVEFRNHR"
        );
        assert_eq!(
            VigenereStrategy::decrypt("LXFOPVEFRNHR", "LEMON"),
            "ATTACKATDAWN"
        );
    }

    #[test]
    fn test_key_skips_non_letters_and_keeps_case() {
        let cipher = VigenereStrategy::encrypt("Attack at dawn!", "lemon");
        assert_eq!(cipher, "Lxfopv ef rnhr!");
        assert_eq!(VigenereStrategy::decrypt(&cipher, "LEMON"), "Attack at dawn!");
    }

    #[test]
    fn test_empty_key_is_identity() {
        assert_eq!(VigenereStrategy::decrypt("abc", "123"), "abc");
    }

    #[test]
    fn test_shortest_period() {
        assert_eq!(shortest_period("SECRETSECRET"), "SECRET");
        assert_eq!(shortest_period("AAAA"), "A");
        assert_eq!(shortest_period("ABCAB"), "ABCAB");
    }

    #[test]
    fn test_rotate_moves_counts_back() {
        let mut counts = [0usize; 26];
        counts[3] = 5;
        assert_eq!(rotate(&counts, 3)[0], 5);
        assert_eq!(rotate(&counts, 4)[25], 5);
    }

    #[tokio::test]
    async fn test_dictionary_attack_recovers_key() {
        let plain = "MEET ME AFTER THE PARTY TONIGHT AT THE OLD HOUSE";
        let cipher = VigenereStrategy::encrypt(plain, "SECRET");
        let candidate = strategy().break_vigenere(&cipher).await.unwrap();
        assert_eq!(candidate.key, CipherKey::keyword("SECRET"));
        assert_eq!(candidate.text, plain);

        let validation = candidate.validation.unwrap();
        assert_eq!(validation.percentage, 100.0);
        assert!(validation.invalid_words.is_empty());
        assert_eq!(validation.total_words, Some(10));
    }

    #[tokio::test]
    async fn test_too_few_letters() {
        let err = strategy().break_vigenere("x 1").await.unwrap_err();
        assert!(matches!(err, StrategyError::NoCandidate { .. }));
    }

    #[tokio::test]
    async fn test_deterministic() {
        let s = strategy();
        let a = s.break_vigenere("Lxfopv ef rnhr").await;
        let b = s.break_vigenere("Lxfopv ef rnhr").await;
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_length_estimate_bounded_by_text() {
        let s = strategy();
        let letters = letter_indices("abcdef");
        let lengths = s.estimate_key_lengths(&letters);
        assert!(!lengths.is_empty());
        assert!(lengths.iter().all(|&l| l <= 3));
    }
}
