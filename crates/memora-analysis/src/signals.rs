//! Independent signal analyzers.
//!
//! Every function here is pure: it reads normalized text (and, for the
//! history-dependent ones, a window of normalized prior samples or prior
//! scores) and returns a bounded score. None of them fail on empty or
//! whitespace-only input.

pub mod behavior;
pub mod emotion;
pub mod language;
pub mod memory;
pub mod orientation;
pub mod speech;

/// Clamp to [0, 1]. NaN passes through so the caller can detect it.
pub(crate) fn unit(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}

/// `min(count / divisor, 1)`: the saturating ratio used by marker counts.
pub(crate) fn saturating_ratio(count: usize, divisor: f64) -> f64 {
    unit(count as f64 / divisor)
}
