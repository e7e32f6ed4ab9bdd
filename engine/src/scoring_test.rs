use super::*;

#[test]
fn base_score_for_four_of_five() {
    let accuracy = 4.0 / 5.0;
    assert!((base_score(accuracy) - 109.0).abs() < 1e-9);
}

#[test]
fn base_score_spans_85_to_115() {
    assert!((base_score(0.0) - 85.0).abs() < f64::EPSILON);
    assert!((base_score(1.0) - 115.0).abs() < f64::EPSILON);
}

#[test]
fn time_factor_is_capped() {
    assert!((time_factor(45.0) - 1.0).abs() < f64::EPSILON);
    assert!((time_factor(90.0) - 0.5).abs() < f64::EPSILON);
    assert!((time_factor(10.0) - MAX_TIME_FACTOR).abs() < f64::EPSILON);
    assert!((time_factor(0.0) - MAX_TIME_FACTOR).abs() < f64::EPSILON);
    assert!((time_factor(-3.0) - MAX_TIME_FACTOR).abs() < f64::EPSILON);
}

#[test]
fn variety_counts_distinct_categories() {
    let cats = [Category::Logic, Category::Logic, Category::Verbal];
    assert_eq!(variety_bonus(&cats), 4);
    assert_eq!(variety_bonus(&[]), 0);
}

#[test]
fn four_of_five_at_optimal_pace_with_full_variety() {
    // 109 * 1.0 + 5 * 2 = 119
    let iq = estimate_iq(4, 5, 45.0, &Category::ALL);
    assert_eq!(iq, 119);
}

#[test]
fn perfect_fast_run_clamps_to_max() {
    // 115 * 1.5 + 10 = 182.5 -> 160
    assert_eq!(estimate_iq(5, 5, 5.0, &Category::ALL), MAX_IQ);
}

#[test]
fn slow_run_clamps_to_min() {
    // 85 * (45 / 300) = 12.75 -> 70
    assert_eq!(estimate_iq(0, 5, 300.0, &[Category::Logic]), MIN_IQ);
}

#[test]
fn estimate_stays_in_bounds_for_every_accuracy() {
    for total in 1..=20 {
        for correct in 0..=total {
            for avg in [0.0, 1.0, 20.0, 45.0, 60.0, 90.0, 600.0] {
                let iq = estimate_iq(correct, total, avg, &Category::ALL);
                assert!((MIN_IQ..=MAX_IQ).contains(&iq), "{correct}/{total} @ {avg}s -> {iq}");
            }
        }
    }
}

#[test]
fn zero_total_is_treated_as_zero_accuracy() {
    // 85 * 1.0 + 0 = 85
    assert_eq!(estimate_iq(0, 0, 45.0, &[]), 85);
}

#[test]
fn percentage_rounds() {
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(0, 0), 0);
    assert_eq!(percentage(5, 5), 100);
}
