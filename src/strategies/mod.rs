//! Built-in cipher-breaking strategies.
//!
//! Each strategy is a pure function of (ciphertext, dictionary) and returns
//! its single best candidate. The cascade only sees them through
//! [`CipherStrategy`], so any of the three slots can be replaced.

pub mod caesar;
pub mod fitness;
pub mod rail_fence;
pub mod vigenere;

use std::sync::Arc;

pub use caesar::CaesarStrategy;
pub use rail_fence::RailFenceStrategy;
pub use vigenere::VigenereStrategy;

use crate::config::SearchConfig;
use crate::core::traits::CipherStrategy;
use crate::core::types::CipherMethod;
use crate::dictionary::WordDictionary;

/// One strategy per cipher family, held in cascade order.
///
/// The slots are fixed so the attempt order cannot be rearranged by
/// whoever assembles the set.
pub struct StrategySet {
    pub caesar: Box<dyn CipherStrategy>,
    pub rail_fence: Box<dyn CipherStrategy>,
    pub vigenere: Box<dyn CipherStrategy>,
}

impl StrategySet {
    pub fn new(
        caesar: Box<dyn CipherStrategy>,
        rail_fence: Box<dyn CipherStrategy>,
        vigenere: Box<dyn CipherStrategy>,
    ) -> Self {
        Self {
            caesar,
            rail_fence,
            vigenere,
        }
    }

    /// The built-in strategies sharing one dictionary
    pub fn standard(dictionary: Arc<WordDictionary>, search: &SearchConfig) -> Self {
        Self {
            caesar: Box::new(CaesarStrategy::new(Arc::clone(&dictionary))),
            rail_fence: Box::new(RailFenceStrategy::new(
                Arc::clone(&dictionary),
                search.max_rails,
            )),
            vigenere: Box::new(VigenereStrategy::new(dictionary, search.clone())),
        }
    }

    /// Strategies paired with the slot they occupy, in cascade order
    pub fn in_cascade_order(&self) -> [(CipherMethod, &dyn CipherStrategy); 3] {
        [
            (CipherMethod::Caesar, self.caesar.as_ref()),
            (CipherMethod::RailFence, self.rail_fence.as_ref()),
            (CipherMethod::Vigenere, self.vigenere.as_ref()),
        ]
    }

    /// Union of every strategy's own word list
    pub fn fallback_dictionary(&self) -> WordDictionary {
        WordDictionary::union(
            self.in_cascade_order()
                .iter()
                .map(|(_, strategy)| strategy.known_words()),
        )
    }
}

impl std::fmt::Debug for StrategySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategySet")
            .field("caesar", &self.caesar.method())
            .field("rail_fence", &self.rail_fence.method())
            .field("vigenere", &self.vigenere.method())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_order() {
        let set = StrategySet::standard(WordDictionary::common_english(), &SearchConfig::default());
        let methods: Vec<CipherMethod> = set
            .in_cascade_order()
            .iter()
            .map(|(slot, strategy)| {
                assert_eq!(*slot, strategy.method());
                *slot
            })
            .collect();
        assert_eq!(methods, CipherMethod::CASCADE.to_vec());
    }

    #[test]
    fn test_fallback_dictionary_is_union_of_word_lists() {
        let set = StrategySet::new(
            Box::new(CaesarStrategy::new(Arc::new(WordDictionary::new(["alpha"])))),
            Box::new(RailFenceStrategy::new(
                Arc::new(WordDictionary::new(["beta"])),
                5,
            )),
            Box::new(VigenereStrategy::new(
                Arc::new(WordDictionary::new(["gamma", "alpha"])),
                SearchConfig::default(),
            )),
        );
        assert_eq!(
            set.fallback_dictionary().sorted_words(),
            vec!["ALPHA", "BETA", "GAMMA"]
        );
    }
}
