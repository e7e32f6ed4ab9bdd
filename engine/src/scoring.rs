//! IQ estimate heuristic.
//!
//! A display-flavor formula, not a psychometric model: accuracy maps onto
//! [85, 115], a speed factor scales it, category variety adds a small bonus,
//! and the result is clamped to [70, 160].

use std::collections::HashSet;

use crate::question::Category;

#[cfg(test)]
#[path = "scoring_test.rs"]
mod scoring_test;

pub const MIN_IQ: u32 = 70;
pub const MAX_IQ: u32 = 160;

/// Average seconds per question considered optimal.
pub const OPTIMAL_SECS: f64 = 45.0;
/// Cap on the speed multiplier.
pub const MAX_TIME_FACTOR: f64 = 1.5;
/// Bonus points per distinct category answered.
pub const VARIETY_POINTS: u32 = 2;

/// Base score before time and variety adjustments: `85 + accuracy * 30`.
#[must_use]
pub fn base_score(accuracy: f64) -> f64 {
    85.0 + accuracy.clamp(0.0, 1.0) * 30.0
}

/// Speed multiplier, `min(45 / average, 1.5)`.
#[must_use]
pub fn time_factor(average_secs: f64) -> f64 {
    if average_secs <= 0.0 || !average_secs.is_finite() {
        return MAX_TIME_FACTOR;
    }
    (OPTIMAL_SECS / average_secs).min(MAX_TIME_FACTOR)
}

/// Bonus for the number of distinct categories answered.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn variety_bonus(categories: &[Category]) -> u32 {
    let distinct: HashSet<Category> = categories.iter().copied().collect();
    distinct.len() as u32 * VARIETY_POINTS
}

/// Estimate an IQ score for a finished quiz.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate_iq(correct: usize, total: usize, average_secs: f64, categories: &[Category]) -> u32 {
    let accuracy = if total == 0 { 0.0 } else { correct as f64 / total as f64 };
    let scaled = base_score(accuracy) * time_factor(average_secs);
    let raw = (scaled + f64::from(variety_bonus(categories))).round();
    raw.clamp(f64::from(MIN_IQ), f64::from(MAX_IQ)) as u32
}

/// Percentage of correct answers, rounded.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}
