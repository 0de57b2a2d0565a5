//! Best-candidate selection.

use std::cmp::Ordering;

use crate::candidates::CameraCandidate;

/// A candidate with its score and generation index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: CameraCandidate,
    pub score: f64,
    /// Position in the generated palette; lower wins ties
    pub index: usize,
}

impl ScoredCandidate {
    /// Pair a candidate with its score and generation index.
    pub fn new(candidate: CameraCandidate, score: f64, index: usize) -> Self {
        Self {
            candidate,
            score,
            index,
        }
    }
}

/// Ranking order: score descending, then generation index ascending.
///
/// NaN scores rank below every real score.
pub fn rank(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    match (a.score.is_nan(), b.score.is_nan()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => b
            .score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index)),
    }
}

/// Sort candidates best-first.
pub fn sort_ranked(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by(rank);
}

/// The best-scoring candidate; `None` for an empty list.
pub fn select_best(mut candidates: Vec<ScoredCandidate>) -> Option<ScoredCandidate> {
    sort_ranked(&mut candidates);
    candidates.into_iter().next()
}
