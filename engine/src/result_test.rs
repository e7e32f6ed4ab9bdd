use super::*;

fn sample() -> TestResult {
    TestResult {
        score: 3,
        total: 4,
        percentage: 75,
        iq_estimate: 118,
        completed_at_ms: 1_700_000_000_000,
        time_spent_secs: 120,
        categories: vec![Category::Logic, Category::Logic, Category::Verbal, Category::Pattern],
        breakdown: vec![
            CategoryScore { category: Category::Logic, correct: 1, total: 2 },
            CategoryScore { category: Category::Verbal, correct: 1, total: 1 },
            CategoryScore { category: Category::Pattern, correct: 1, total: 1 },
        ],
    }
}

#[test]
fn stored_json_parses_back() {
    let raw = serde_json::to_string(&sample()).expect("serialize");
    let parsed = TestResult::from_json(&raw).expect("parse");
    assert_eq!(parsed, sample());
}

#[test]
fn garbage_is_malformed() {
    let err = TestResult::from_json("{not json").expect_err("should fail");
    assert!(matches!(err, ResultError::Malformed(_)));
}

#[test]
fn missing_fields_are_malformed() {
    let err = TestResult::from_json(r#"{"score": 1}"#).expect_err("should fail");
    assert!(matches!(err, ResultError::Malformed(_)));
}

#[test]
fn score_above_total_is_rejected() {
    let raw = r#"{"score":6,"total":5,"percentage":120,"iq_estimate":120,"completed_at_ms":0,"time_spent_secs":10}"#;
    let err = TestResult::from_json(raw).expect_err("should fail");
    assert!(matches!(err, ResultError::Inconsistent { score: 6, total: 5 }));
}

#[test]
fn optional_lists_default_to_empty() {
    let raw = r#"{"score":2,"total":5,"percentage":40,"iq_estimate":100,"completed_at_ms":0,"time_spent_secs":50}"#;
    let parsed = TestResult::from_json(raw).expect("parse");
    assert!(parsed.categories.is_empty());
    assert!(parsed.breakdown.is_empty());
}

#[test]
fn average_secs_divides_by_total() {
    assert!((sample().average_secs() - 30.0).abs() < f64::EPSILON);
    let empty = TestResult { total: 0, score: 0, ..sample() };
    assert!(empty.average_secs().abs() < f64::EPSILON);
}

#[test]
fn strongest_category_prefers_accuracy_then_volume() {
    let mut result = sample();
    result.breakdown.push(CategoryScore { category: Category::Spatial, correct: 2, total: 2 });
    assert_eq!(result.strongest_category(), Some(Category::Spatial));
}

#[test]
fn strongest_category_none_without_breakdown() {
    let result = TestResult { breakdown: Vec::new(), ..sample() };
    assert_eq!(result.strongest_category(), None);
}
