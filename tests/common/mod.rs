// Test utility module for cipherid integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use cipherid::observability::RecordingObserver;
use cipherid::{
    CipherKey, CipherMethod, CipherStrategy, Coordinator, StrategyCandidate, StrategyError,
    StrategySet, ThresholdsConfig, WordDictionary,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const PANGRAM: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

pub fn pangram_dictionary() -> Arc<WordDictionary> {
    Arc::new(WordDictionary::new(PANGRAM.split_whitespace()))
}

/// Shift every ASCII letter forward, preserving case
pub fn caesar_encrypt(plaintext: &str, shift: u8) -> String {
    plaintext
        .chars()
        .map(|c| {
            let base = if c.is_ascii_uppercase() {
                b'A'
            } else if c.is_ascii_lowercase() {
                b'a'
            } else {
                return c;
            };
            (((c as u8 - base + shift) % 26) + base) as char
        })
        .collect()
}

// Helper to write a JSON dictionary fixture
pub fn write_dictionary(words: &[&str]) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("dictionary.json");
    let document = serde_json::json!({ "words": words });
    std::fs::write(&path, document.to_string()).expect("Failed to write dictionary");
    (temp_dir, path)
}

/// Strategy returning a canned answer and counting its invocations
pub struct MockStrategy {
    method: CipherMethod,
    answer: Result<StrategyCandidate, StrategyError>,
    known_words: Vec<String>,
    calls: Arc<AtomicUsize>,
}

impl MockStrategy {
    pub fn answering(method: CipherMethod, candidate: StrategyCandidate) -> Self {
        Self {
            method,
            answer: Ok(candidate),
            known_words: Vec::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(method: CipherMethod, message: &str) -> Self {
        Self {
            method,
            answer: Err(StrategyError::failed(method, message)),
            known_words: Vec::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Answer with `text` under a well-formed key for this method
    pub fn with_text(method: CipherMethod, text: &str) -> Self {
        let key = match method {
            CipherMethod::Caesar => CipherKey::shift(1),
            CipherMethod::RailFence => CipherKey::rails(2),
            CipherMethod::Vigenere => CipherKey::keyword("KEY"),
        };
        Self::answering(method, StrategyCandidate::new(key, text, 100.0))
    }

    pub fn with_known_words(mut self, words: &[&str]) -> Self {
        self.known_words = words.iter().map(|w| w.to_string()).collect();
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CipherStrategy for MockStrategy {
    fn method(&self) -> CipherMethod {
        self.method
    }

    async fn break_cipher(&self, _ciphertext: &str) -> Result<StrategyCandidate, StrategyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }

    fn known_words(&self) -> Vec<String> {
        self.known_words.clone()
    }
}

/// Coordinator over three mocks, plus their call counters and a recorder
pub struct MockCascade {
    pub coordinator: Coordinator,
    pub observer: Arc<RecordingObserver>,
    pub calls: [Arc<AtomicUsize>; 3],
}

impl MockCascade {
    pub fn new(
        dictionary: Option<Arc<WordDictionary>>,
        caesar: MockStrategy,
        rail_fence: MockStrategy,
        vigenere: MockStrategy,
    ) -> Self {
        let calls = [caesar.calls(), rail_fence.calls(), vigenere.calls()];
        let observer = Arc::new(RecordingObserver::new());
        let strategies = StrategySet::new(Box::new(caesar), Box::new(rail_fence), Box::new(vigenere));
        let coordinator = Coordinator::new(dictionary, strategies, ThresholdsConfig::default())
            .with_observer(observer.clone());
        Self {
            coordinator,
            observer,
            calls,
        }
    }

    pub fn call_counts(&self) -> [usize; 3] {
        [
            self.calls[0].load(Ordering::SeqCst),
            self.calls[1].load(Ordering::SeqCst),
            self.calls[2].load(Ordering::SeqCst),
        ]
    }
}
