//! Structured diagnostic events emitted while a resolution runs.
//!
//! Events are delivered to a [`ResolutionObserver`] synchronously, in the
//! order they happen. They never influence control flow.

use crate::core::types::CipherMethod;
use std::fmt;
use std::sync::Mutex;
use tracing::{debug, info};

/// States of the resolution cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionState {
    Idle,
    TryingCaesar,
    TryingRailFence,
    TryingVigenere,
    /// A candidate cleared the global threshold; terminal
    EarlySuccess,
    /// No candidate cleared the threshold; picking the best collected one
    Ranking,
    Done,
}

impl ResolutionState {
    /// The state in which a given strategy runs
    pub fn trying(method: CipherMethod) -> Self {
        match method {
            CipherMethod::Caesar => Self::TryingCaesar,
            CipherMethod::RailFence => Self::TryingRailFence,
            CipherMethod::Vigenere => Self::TryingVigenere,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::EarlySuccess | Self::Done)
    }
}

impl fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::TryingCaesar => write!(f, "trying_caesar"),
            Self::TryingRailFence => write!(f, "trying_rail_fence"),
            Self::TryingVigenere => write!(f, "trying_vigenere"),
            Self::EarlySuccess => write!(f, "early_success"),
            Self::Ranking => write!(f, "ranking"),
            Self::Done => write!(f, "done"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionEvent {
    StateChanged {
        from: ResolutionState,
        to: ResolutionState,
    },
    StrategyStarted {
        method: CipherMethod,
    },
    /// Recoverable: the cascade continues with the next strategy
    StrategyFailed {
        method: CipherMethod,
        reason: String,
    },
    CandidateRecorded {
        method: CipherMethod,
        confidence: f64,
        raw_score: f64,
    },
    EarlyExit {
        method: CipherMethod,
        confidence: f64,
    },
    RankingCompleted {
        candidates: usize,
        winner: CipherMethod,
        confidence: f64,
    },
}

/// Receives diagnostic events from the cascade.
pub trait ResolutionObserver: Send + Sync {
    fn on_event(&self, event: &ResolutionEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn on_event(&self, event: &ResolutionEvent) {
        match event {
            ResolutionEvent::StateChanged { from, to } => {
                debug!(%from, %to, "Resolution state changed");
            }
            ResolutionEvent::StrategyStarted { method } => {
                debug!(%method, "Trying strategy");
            }
            ResolutionEvent::StrategyFailed { method, reason } => {
                info!(%method, %reason, "Strategy produced no candidate");
            }
            ResolutionEvent::CandidateRecorded {
                method,
                confidence,
                raw_score,
            } => {
                debug!(%method, confidence, raw_score, "Candidate recorded");
            }
            ResolutionEvent::EarlyExit { method, confidence } => {
                info!(%method, confidence, "Confident candidate found, stopping early");
            }
            ResolutionEvent::RankingCompleted {
                candidates,
                winner,
                confidence,
            } => {
                info!(candidates, %winner, confidence, "No conclusive candidate, best ranked");
            }
        }
    }
}

/// Keeps every event in memory, in delivery order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ResolutionEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ResolutionEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Strategies in the order they were started
    pub fn started_methods(&self) -> Vec<CipherMethod> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ResolutionEvent::StrategyStarted { method } => Some(method),
                _ => None,
            })
            .collect()
    }

    /// Every state entered, starting from the first transition's origin
    pub fn states(&self) -> Vec<ResolutionState> {
        let mut states = Vec::new();
        for event in self.events() {
            if let ResolutionEvent::StateChanged { from, to } = event {
                if states.is_empty() {
                    states.push(from);
                }
                states.push(to);
            }
        }
        states
    }
}

impl ResolutionObserver for RecordingObserver {
    fn on_event(&self, event: &ResolutionEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trying_state_per_method() {
        assert_eq!(
            ResolutionState::trying(CipherMethod::RailFence),
            ResolutionState::TryingRailFence
        );
        assert!(ResolutionState::EarlySuccess.is_terminal());
        assert!(!ResolutionState::Ranking.is_terminal());
    }

    #[test]
    fn test_recording_observer_tracks_states() {
        let observer = RecordingObserver::new();
        observer.on_event(&ResolutionEvent::StateChanged {
            from: ResolutionState::Idle,
            to: ResolutionState::TryingCaesar,
        });
        observer.on_event(&ResolutionEvent::StrategyStarted {
            method: CipherMethod::Caesar,
        });
        observer.on_event(&ResolutionEvent::StateChanged {
            from: ResolutionState::TryingCaesar,
            to: ResolutionState::EarlySuccess,
        });

        assert_eq!(
            observer.states(),
            vec![
                ResolutionState::Idle,
                ResolutionState::TryingCaesar,
                ResolutionState::EarlySuccess,
            ]
        );
        assert_eq!(observer.started_methods(), vec![CipherMethod::Caesar]);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ResolutionState::TryingVigenere.to_string(), "trying_vigenere");
    }
}
