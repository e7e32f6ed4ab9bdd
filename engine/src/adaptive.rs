//! Difficulty-bucketed question sampling driven by running accuracy.
//!
//! DESIGN
//! ======
//! Selection prefers the bucket matching the player's current accuracy and
//! pads from the other buckets only when that bucket is short. The result is
//! shuffled, never repeats an id, and is empty once the bank is exhausted.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::question::{Difficulty, IqQuestion, QUESTION_BANK};

#[cfg(test)]
#[path = "adaptive_test.rs"]
mod adaptive_test;

/// Accuracy assumed before any question has been answered.
pub const NEUTRAL_ACCURACY: f64 = 0.5;

/// Fraction of answered questions that were correct.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn running_accuracy(correct: usize, answered: usize) -> f64 {
    if answered == 0 {
        return NEUTRAL_ACCURACY;
    }
    correct as f64 / answered as f64
}

/// Map running accuracy onto the difficulty bucket to draw from.
#[must_use]
pub fn target_difficulty(accuracy: f64) -> Difficulty {
    if accuracy > 0.8 {
        Difficulty::Hard
    } else if accuracy > 0.5 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

/// Pick up to `count` unused questions from the static bank.
#[must_use]
pub fn select_adaptive<R: Rng + ?Sized>(
    accuracy: f64,
    used: &[&str],
    count: usize,
    rng: &mut R,
) -> Vec<&'static IqQuestion> {
    select_from(QUESTION_BANK, accuracy, used, count, rng)
}

/// Same as [`select_adaptive`] over an arbitrary table.
#[must_use]
pub fn select_from<'a, R: Rng + ?Sized>(
    bank: &'a [IqQuestion],
    accuracy: f64,
    used: &[&str],
    count: usize,
    rng: &mut R,
) -> Vec<&'a IqQuestion> {
    let target = target_difficulty(accuracy);
    let (mut preferred, mut others): (Vec<&IqQuestion>, Vec<&IqQuestion>) = bank
        .iter()
        .filter(|q| !used.contains(&q.id))
        .partition(|q| q.difficulty == target);

    preferred.shuffle(rng);
    preferred.truncate(count);

    if preferred.len() < count {
        others.shuffle(rng);
        let remaining = count - preferred.len();
        preferred.extend(others.into_iter().take(remaining));
    }

    preferred.shuffle(rng);
    preferred
}
