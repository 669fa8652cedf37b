//! Plaintext fitness shared by the built-in strategies.
//!
//! A candidate is scored on two axes: how many of its tokens are
//! dictionary words and how closely its letter distribution matches
//! English. The blend lands in [0, 1000].

use crate::validation::TextValidator;

/// Relative English letter frequencies, A through Z (sums to ~1.0)
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

const WORD_COMPONENT: f64 = 600.0;
const LETTER_COMPONENT: f64 = 400.0;

/// Count of each letter A-Z, case-insensitive; other characters ignored
pub fn letter_counts(text: &str) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for c in text.chars().filter(char::is_ascii_alphabetic) {
        counts[(c.to_ascii_uppercase() as u8 - b'A') as usize] += 1;
    }
    counts
}

/// 1 minus the total-variation distance between the text's letter
/// distribution and English. 0 when the text has no letters.
pub fn letter_fit(text: &str) -> f64 {
    let counts = letter_counts(text);
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let distance: f64 = counts
        .iter()
        .zip(ENGLISH_FREQUENCIES.iter())
        .map(|(&count, &expected)| (count as f64 / total as f64 - expected).abs())
        .sum::<f64>()
        / 2.0;
    (1.0 - distance).clamp(0.0, 1.0)
}

/// Chi-squared statistic of letter counts against English
pub fn chi_squared(counts: &[usize; 26]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return f64::INFINITY;
    }
    counts
        .iter()
        .zip(ENGLISH_FREQUENCIES.iter())
        .map(|(&observed, &frequency)| {
            let expected = frequency * total as f64;
            let delta = observed as f64 - expected;
            delta * delta / expected
        })
        .sum()
}

/// Raw candidate score in [0, 1000]
pub fn candidate_score(text: &str, validator: &TextValidator) -> f64 {
    let word_ratio = validator.validate(text).confidence;
    WORD_COMPONENT * word_ratio + LETTER_COMPONENT * letter_fit(text)
}

/// Shift a single letter backwards, preserving case; other characters pass through
pub(crate) fn shift_back(c: char, shift: u8) -> char {
    if c.is_ascii_uppercase() {
        (((c as u8 - b'A' + 26 - shift % 26) % 26) + b'A') as char
    } else if c.is_ascii_lowercase() {
        (((c as u8 - b'a' + 26 - shift % 26) % 26) + b'a') as char
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordDictionary;
    use std::sync::Arc;

    #[test]
    fn test_frequencies_sum_to_one() {
        let sum: f64 = ENGLISH_FREQUENCIES.iter().sum();
        assert!((sum - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_letter_fit_prefers_english() {
        let english = letter_fit("the quick brown fox jumps over the lazy dog and then it rests");
        let noise = letter_fit("qzxj vqkz wxzq jjqz xqvk");
        assert!(english > noise);
        assert_eq!(letter_fit("1234 !!"), 0.0);
    }

    #[test]
    fn test_chi_squared_empty_is_infinite() {
        assert!(chi_squared(&[0; 26]).is_infinite());
    }

    #[test]
    fn test_candidate_score_range() {
        let validator = TextValidator::new(Arc::new(WordDictionary::new(["HELLO", "WORLD"])));
        let good = candidate_score("hello world", &validator);
        let bad = candidate_score("xqzv jkqx", &validator);
        assert!(good > 600.0 && good <= 1000.0);
        assert!((0.0..400.0).contains(&bad));
    }

    #[test]
    fn test_shift_back_wraps_and_preserves_case() {
        assert_eq!(shift_back('A', 1), 'Z');
        assert_eq!(shift_back('d', 3), 'a');
        assert_eq!(shift_back('!', 5), '!');
        assert_eq!(shift_back('Q', 0), 'Q');
    }
}
