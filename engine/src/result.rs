//! Persisted quiz summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The IQ test page writes one [`TestResult`] to browser storage under
//! [`RESULTS_STORAGE_KEY`] when a run completes; the results page reads it
//! back. Anything that fails to parse is treated as "no results".

use serde::{Deserialize, Serialize};

use crate::question::Category;

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

/// localStorage key for the most recent quiz outcome.
pub const RESULTS_STORAGE_KEY: &str = "iqTestResults";

/// Error returned by [`TestResult::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ResultError {
    /// The stored blob is not a valid result document.
    #[error("malformed stored result: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The blob parsed but its counts are inconsistent.
    #[error("stored result claims {score} correct out of {total}")]
    Inconsistent { score: u32, total: u32 },
}

/// Correct/total tally for one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub correct: u32,
    pub total: u32,
}

/// Summary of a completed quiz run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Number of correct answers.
    pub score: u32,
    /// Number of questions presented.
    pub total: u32,
    /// Rounded percentage correct.
    pub percentage: u32,
    /// Output of the IQ heuristic.
    pub iq_estimate: u32,
    /// Milliseconds since the Unix epoch when the run finished.
    pub completed_at_ms: i64,
    /// Total seconds spent across all questions.
    pub time_spent_secs: u32,
    /// Category of every question answered, in order.
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub breakdown: Vec<CategoryScore>,
}

impl TestResult {
    /// Parse a stored result, rejecting inconsistent counts.
    ///
    /// # Errors
    ///
    /// Returns [`ResultError::Malformed`] for invalid JSON and
    /// [`ResultError::Inconsistent`] when `score` exceeds `total`.
    pub fn from_json(raw: &str) -> Result<Self, ResultError> {
        let parsed: Self = serde_json::from_str(raw)?;
        if parsed.score > parsed.total {
            return Err(ResultError::Inconsistent { score: parsed.score, total: parsed.total });
        }
        Ok(parsed)
    }

    /// Average seconds per question, or zero for an empty run.
    #[must_use]
    pub fn average_secs(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.time_spent_secs) / f64::from(self.total)
    }

    /// Category with the best accuracy, ties going to the one answered most.
    #[must_use]
    pub fn strongest_category(&self) -> Option<Category> {
        self.breakdown
            .iter()
            .filter(|c| c.total > 0)
            .max_by(|a, b| {
                let lhs = u64::from(a.correct) * u64::from(b.total);
                let rhs = u64::from(b.correct) * u64::from(a.total);
                lhs.cmp(&rhs).then(a.total.cmp(&b.total))
            })
            .map(|c| c.category)
    }
}
