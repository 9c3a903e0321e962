//! Business readiness rubric.
//!
//! Collapses three quality signals into one score in [0, 1]:
//!
//! ```text
//! raw   = 0.6 × groundedness + 0.3 × response_quality − 0.3 × hallucination_risk
//! score = clamp(raw, 0, 1)
//! ```
//!
//! Component metrics are not range-checked; only the result is clamped.

use pilot_playbook_domain::QualityMetrics;
use serde::Serialize;

pub const GROUNDEDNESS_WEIGHT: f64 = 0.6;
pub const RESPONSE_QUALITY_WEIGHT: f64 = 0.3;
pub const HALLUCINATION_PENALTY_WEIGHT: f64 = 0.3;

/// Clamp a score to [0, 1].
pub fn normalize_score(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}

/// Weighted terms behind a rubric score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RubricBreakdown {
    pub groundedness_term: f64,
    pub response_quality_term: f64,
    /// Subtracted from the sum; non-negative for non-negative risk.
    pub hallucination_penalty: f64,
    /// Unclamped weighted sum.
    pub raw: f64,
    pub score: f64,
}

pub fn rubric_breakdown(metrics: &QualityMetrics) -> RubricBreakdown {
    let groundedness_term = GROUNDEDNESS_WEIGHT * metrics.groundedness;
    let response_quality_term = RESPONSE_QUALITY_WEIGHT * metrics.response_quality;
    let hallucination_penalty = HALLUCINATION_PENALTY_WEIGHT * metrics.hallucination_risk;

    let raw = groundedness_term + response_quality_term - hallucination_penalty;
    RubricBreakdown {
        groundedness_term,
        response_quality_term,
        hallucination_penalty,
        raw,
        score: normalize_score(raw),
    }
}

pub fn rubric_score(metrics: &QualityMetrics) -> f64 {
    rubric_breakdown(metrics).score
}
