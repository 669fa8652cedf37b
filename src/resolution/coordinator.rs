//! Cascading resolution engine.
//!
//! Strategies are tried in the fixed order Caesar, Rail Fence, Vigenère.
//! Each candidate is validated against the dictionary; the first one whose
//! confidence reaches the global threshold is returned immediately and no
//! later strategy runs. Otherwise every collected candidate is ranked and
//! the best is returned with `success: false`.

use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use super::candidate::{CandidateResult, DecryptionOutcome};
use super::ranking::best_candidate;
use crate::config::{CipherIdConfig, ThresholdsConfig};
use crate::core::errors::{Error, Result, StrategyError};
use crate::core::traits::CipherStrategy;
use crate::core::types::{CipherMethod, StrategyCandidate};
use crate::dictionary::{load_dictionary, WordDictionary};
use crate::observability::{
    ResolutionEvent, ResolutionObserver, ResolutionState, TracingObserver,
};
use crate::strategies::StrategySet;
use crate::validation::{TextValidator, ValidationReport};

/// Drives the cascade for one ciphertext at a time.
///
/// Holds no per-request state, so one coordinator can serve concurrent
/// resolutions; each `resolve` call owns its own candidate list.
pub struct Coordinator {
    strategies: StrategySet,
    validator: TextValidator,
    thresholds: ThresholdsConfig,
    observer: Arc<dyn ResolutionObserver>,
}

impl Coordinator {
    /// Build a coordinator.
    ///
    /// With no dictionary, the union of the strategies' word lists is used.
    pub fn new(
        dictionary: Option<Arc<WordDictionary>>,
        strategies: StrategySet,
        thresholds: ThresholdsConfig,
    ) -> Self {
        let dictionary = dictionary.unwrap_or_else(|| {
            let fallback = strategies.fallback_dictionary();
            debug!(
                words = fallback.len(),
                "No dictionary available, using strategy word lists"
            );
            Arc::new(fallback)
        });

        Self {
            strategies,
            validator: TextValidator::new(dictionary),
            thresholds,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Coordinator with the built-in strategies, configured from file settings
    pub fn from_config(config: &CipherIdConfig) -> Self {
        let loaded = config
            .dictionary
            .path
            .as_deref()
            .and_then(load_dictionary)
            .map(Arc::new);
        let strategy_dictionary = loaded
            .clone()
            .unwrap_or_else(WordDictionary::common_english);
        let strategies = StrategySet::standard(strategy_dictionary, &config.search);
        Self::new(loaded, strategies, config.thresholds.clone())
    }

    /// Replace the default `tracing` observer
    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn dictionary(&self) -> &WordDictionary {
        self.validator.dictionary()
    }

    pub fn thresholds(&self) -> &ThresholdsConfig {
        &self.thresholds
    }

    /// Identify the cipher and recover the most plausible plaintext.
    ///
    /// Fails only on empty input or when no strategy produced anything.
    pub async fn resolve(&self, ciphertext: &str) -> Result<DecryptionOutcome> {
        if ciphertext.trim().is_empty() {
            return Err(Error::input("ciphertext must be a non-empty string"));
        }

        self.run_cascade(ciphertext)
            .instrument(info_span!("resolve", chars = ciphertext.chars().count()))
            .await
    }

    /// Run [`Coordinator::resolve`] to completion on a private
    /// current-thread runtime. Must not be called from inside a runtime.
    pub fn resolve_blocking(&self, ciphertext: &str) -> Result<DecryptionOutcome> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create tokio runtime: {}", e))?;
        rt.block_on(self.resolve(ciphertext))
    }

    async fn run_cascade(&self, ciphertext: &str) -> Result<DecryptionOutcome> {
        let mut state = StateTracker::new(self.observer.as_ref());
        let mut candidates: Vec<CandidateResult> = Vec::with_capacity(3);

        for (method, strategy) in self.strategies.in_cascade_order() {
            state.advance(ResolutionState::trying(method));
            self.emit(ResolutionEvent::StrategyStarted { method });

            let candidate = match self.attempt(method, strategy, ciphertext).await {
                Ok(candidate) => candidate,
                Err(e) => {
                    self.emit(ResolutionEvent::StrategyFailed {
                        method,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            self.emit(ResolutionEvent::CandidateRecorded {
                method,
                confidence: candidate.confidence,
                raw_score: candidate.raw_score,
            });

            if self.thresholds.is_conclusive(candidate.confidence) {
                state.advance(ResolutionState::EarlySuccess);
                self.emit(ResolutionEvent::EarlyExit {
                    method,
                    confidence: candidate.confidence,
                });
                return Ok(self.outcome(true, candidate));
            }

            candidates.push(candidate);
        }

        state.advance(ResolutionState::Ranking);
        let collected = candidates.len();
        let best = best_candidate(candidates);
        state.advance(ResolutionState::Done);

        match best {
            Some(candidate) => {
                self.emit(ResolutionEvent::RankingCompleted {
                    candidates: collected,
                    winner: candidate.method,
                    confidence: candidate.confidence,
                });
                Ok(self.outcome(false, candidate))
            }
            None => Err(Error::Exhausted {
                attempted: CipherMethod::CASCADE.to_vec(),
            }),
        }
    }

    /// Run one strategy and validate its answer
    async fn attempt(
        &self,
        method: CipherMethod,
        strategy: &dyn CipherStrategy,
        ciphertext: &str,
    ) -> std::result::Result<CandidateResult, StrategyError> {
        let mut candidate = strategy.break_cipher(ciphertext).await?;
        check_usable(method, &candidate)?;

        let report = match candidate.validation.take() {
            Some(validation) => ValidationReport::from_collaborator(validation, &candidate.text),
            None => self.validator.validate(&candidate.text),
        };

        Ok(CandidateResult::new(method, candidate, report))
    }

    fn outcome(&self, success: bool, candidate: CandidateResult) -> DecryptionOutcome {
        let advisory_threshold_met =
            candidate.confidence >= self.thresholds.advisory_for(candidate.method);
        DecryptionOutcome {
            success,
            candidate,
            advisory_threshold_met,
        }
    }

    fn emit(&self, event: ResolutionEvent) {
        self.observer.on_event(&event);
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("strategies", &self.strategies)
            .field("dictionary_words", &self.dictionary().len())
            .field("thresholds", &self.thresholds)
            .finish()
    }
}

/// Reject candidates the cascade cannot rank
fn check_usable(
    method: CipherMethod,
    candidate: &StrategyCandidate,
) -> std::result::Result<(), StrategyError> {
    if candidate.text.is_empty() {
        return Err(StrategyError::no_candidate(method, "decrypted text is empty"));
    }
    if candidate.key.method() != method {
        return Err(StrategyError::unusable(
            method,
            format!("returned a {} key", candidate.key.method()),
        ));
    }
    if !candidate.key.is_well_formed() {
        return Err(StrategyError::unusable(
            method,
            format!("key {} is out of range", candidate.key),
        ));
    }
    Ok(())
}

/// Tracks the cascade state and reports each transition
struct StateTracker<'a> {
    current: ResolutionState,
    observer: &'a dyn ResolutionObserver,
}

impl<'a> StateTracker<'a> {
    fn new(observer: &'a dyn ResolutionObserver) -> Self {
        Self {
            current: ResolutionState::Idle,
            observer,
        }
    }

    fn advance(&mut self, to: ResolutionState) {
        let from = std::mem::replace(&mut self.current, to);
        self.observer
            .on_event(&ResolutionEvent::StateChanged { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CipherKey;

    #[test]
    fn test_check_usable_rejects_mismatched_key() {
        let candidate = StrategyCandidate::new(CipherKey::rails(3), "text", 1.0);
        let err = check_usable(CipherMethod::Caesar, &candidate).unwrap_err();
        assert!(matches!(err, StrategyError::Unusable { .. }));
    }

    #[test]
    fn test_check_usable_rejects_empty_text() {
        let candidate = StrategyCandidate::new(CipherKey::shift(3), "", 1.0);
        let err = check_usable(CipherMethod::Caesar, &candidate).unwrap_err();
        assert!(matches!(err, StrategyError::NoCandidate { .. }));
    }

    #[test]
    fn test_check_usable_rejects_out_of_range_key() {
        let candidate = StrategyCandidate::new(CipherKey::shift(30), "text", 1.0);
        assert!(check_usable(CipherMethod::Caesar, &candidate).is_err());
    }

    #[test]
    fn test_empty_input_fails_before_strategies() {
        let coordinator = Coordinator::from_config(&CipherIdConfig::default());
        let err = coordinator.resolve_blocking("   ").unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_resolve_blocking_caesar() {
        let coordinator = Coordinator::from_config(&CipherIdConfig::default());
        // "attack at dawn" shifted by 3
        let outcome = coordinator.resolve_blocking("dwwdfn dw gdzq").unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.method(), CipherMethod::Caesar);
        assert_eq!(outcome.params(), &CipherKey::shift(3));
        assert_eq!(outcome.decrypted(), "attack at dawn");
        assert!(outcome.advisory_threshold_met);
    }
}
