use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn running_accuracy_defaults_to_neutral() {
    assert!((running_accuracy(0, 0) - NEUTRAL_ACCURACY).abs() < f64::EPSILON);
    assert!((running_accuracy(3, 4) - 0.75).abs() < f64::EPSILON);
}

#[test]
fn thresholds_pick_expected_bucket() {
    assert_eq!(target_difficulty(1.0), Difficulty::Hard);
    assert_eq!(target_difficulty(0.81), Difficulty::Hard);
    assert_eq!(target_difficulty(0.8), Difficulty::Medium);
    assert_eq!(target_difficulty(0.51), Difficulty::Medium);
    assert_eq!(target_difficulty(0.5), Difficulty::Easy);
    assert_eq!(target_difficulty(0.0), Difficulty::Easy);
}

#[test]
fn fresh_start_draws_easy_questions() {
    let picked = select_adaptive(running_accuracy(0, 0), &[], 3, &mut rng());
    assert_eq!(picked.len(), 3);
    assert!(picked.iter().all(|q| q.difficulty == Difficulty::Easy));
}

#[test]
fn high_accuracy_prefers_hard_and_pads_from_rest() {
    let hard = QUESTION_BANK.iter().filter(|q| q.difficulty == Difficulty::Hard).count();
    let picked = select_adaptive(1.0, &[], hard + 2, &mut rng());
    assert_eq!(picked.len(), hard + 2);
    let hard_picked = picked.iter().filter(|q| q.difficulty == Difficulty::Hard).count();
    assert_eq!(hard_picked, hard);
}

#[test]
fn never_returns_duplicates_or_used_ids() {
    let used = ["pattern_001", "logic_002", "verbal_003"];
    for seed in 0..50 {
        let mut r = StdRng::seed_from_u64(seed);
        let picked = select_adaptive(0.6, &used, 10, &mut r);
        let ids: HashSet<&str> = picked.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), picked.len());
        assert!(used.iter().all(|id| !ids.contains(id)));
    }
}

#[test]
fn never_exceeds_remaining_pool() {
    let used: Vec<&str> = QUESTION_BANK.iter().skip(3).map(|q| q.id).collect();
    let picked = select_adaptive(0.9, &used, 10, &mut rng());
    assert_eq!(picked.len(), 3);
}

#[test]
fn exhausted_bank_returns_empty() {
    let used: Vec<&str> = QUESTION_BANK.iter().map(|q| q.id).collect();
    assert!(select_adaptive(0.5, &used, 5, &mut rng()).is_empty());
}

#[test]
fn zero_count_returns_empty() {
    assert!(select_adaptive(0.5, &[], 0, &mut rng()).is_empty());
}

#[test]
fn select_from_custom_table() {
    let bank = &QUESTION_BANK[..2];
    let picked = select_from(bank, 0.0, &[], 5, &mut rng());
    assert_eq!(picked.len(), 2);
}
