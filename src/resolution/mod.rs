//! Cascade coordination, candidate ranking and the final outcome.

pub mod candidate;
pub mod coordinator;
pub mod ranking;

pub use candidate::{CandidateMetadata, CandidateResult, DecryptionOutcome};
pub use coordinator::Coordinator;
pub use ranking::{best_candidate, rank_candidates};
