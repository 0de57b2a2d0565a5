//! Framing metrics.
//!
//! Provides standardized metrics for monitoring camera placement:
//! - Views generated by winning candidate kind
//! - Failures by reason
//! - Winning score distribution
//! - Disqualified candidates and journeys

use cinecam_models::CandidateKind;
use metrics::{counter, histogram};

// =============================================================================
// Metric Names
// =============================================================================

/// Metric name constants for consistency.
pub mod names {
    /// Views generated, by winning candidate kind.
    pub const VIEWS_TOTAL: &str = "cinecam_views_total";

    /// Framing requests that produced no view, by reason.
    pub const VIEW_FAILURES_TOTAL: &str = "cinecam_view_failures_total";

    /// Score of the winning candidate.
    pub const VIEW_SCORE: &str = "cinecam_view_score";

    /// Candidates that failed the visibility gate.
    pub const CANDIDATES_DISQUALIFIED_TOTAL: &str = "cinecam_candidates_disqualified_total";

    /// Journey keyframe sequences generated.
    pub const JOURNEYS_TOTAL: &str = "cinecam_journeys_total";

    /// Keyframes per generated journey.
    pub const JOURNEY_KEYFRAMES: &str = "cinecam_journey_keyframes";
}

// =============================================================================
// Recording Functions
// =============================================================================

/// Record a successfully generated view.
pub fn record_view(kind: CandidateKind, score: f64, disqualified: usize) {
    counter!(names::VIEWS_TOTAL, "kind" => kind.as_str()).increment(1);
    histogram!(names::VIEW_SCORE).record(score);
    if disqualified > 0 {
        counter!(names::CANDIDATES_DISQUALIFIED_TOTAL).increment(disqualified as u64);
    }
}

/// Record a framing request that produced no view.
pub fn record_view_failure(reason: &'static str) {
    counter!(names::VIEW_FAILURES_TOTAL, "reason" => reason).increment(1);
}

/// Record a generated journey.
pub fn record_journey(keyframes: usize) {
    counter!(names::JOURNEYS_TOTAL).increment(1);
    histogram!(names::JOURNEY_KEYFRAMES).record(keyframes as f64);
}

// =============================================================================
// Tests
// =============================================================================
