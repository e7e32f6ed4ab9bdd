use std::collections::HashSet;

use super::*;

#[test]
fn bank_ids_are_unique() {
    let ids: HashSet<&str> = QUESTION_BANK.iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), QUESTION_BANK.len());
}

#[test]
fn every_correct_index_is_within_options() {
    for q in QUESTION_BANK {
        assert!(q.correct < q.options.len(), "{} has out-of-range answer", q.id);
        assert!(q.options.len() >= 2, "{} needs at least two options", q.id);
    }
}

#[test]
fn bank_covers_every_category_and_difficulty() {
    for category in Category::ALL {
        assert!(QUESTION_BANK.iter().any(|q| q.category == category), "missing {category:?}");
    }
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert!(QUESTION_BANK.iter().any(|q| q.difficulty == difficulty), "missing {difficulty:?}");
    }
}

#[test]
fn points_follow_difficulty() {
    for q in QUESTION_BANK {
        let expected = match q.difficulty {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
        };
        assert_eq!(q.points, expected, "{}", q.id);
    }
}

#[test]
fn find_question_by_id() {
    let q = find_question("numerical_001").expect("question exists");
    assert_eq!(q.options[q.correct], "36");
    assert!(find_question("nope").is_none());
}

#[test]
fn fibonacci_answer_is_twenty_one() {
    let q = find_question("pattern_003").expect("question exists");
    assert_eq!(q.options[q.correct], "21");
    assert!(q.is_correct(1));
    assert!(!q.is_correct(3));
}

#[test]
fn time_limit_grows_with_difficulty() {
    assert!(Difficulty::Easy.time_limit_secs() < Difficulty::Medium.time_limit_secs());
    assert!(Difficulty::Medium.time_limit_secs() < Difficulty::Hard.time_limit_secs());
}

#[test]
fn category_serializes_lowercase() {
    let json = serde_json::to_string(&Category::Numerical).expect("serialize");
    assert_eq!(json, "\"numerical\"");
}
