use std::cmp::Ordering;

use super::candidate::CandidateResult;

/// Order candidates by confidence, highest first.
///
/// The sort is stable, so equal confidences keep cascade order and the
/// simpler cipher wins a tie.
pub fn rank_candidates(mut candidates: Vec<CandidateResult>) -> Vec<CandidateResult> {
    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    candidates
}

/// The top-ranked candidate, if any were collected
pub fn best_candidate(candidates: Vec<CandidateResult>) -> Option<CandidateResult> {
    rank_candidates(candidates).into_iter().next()
}
