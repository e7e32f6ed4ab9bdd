use super::*;

const STORED: &str = r#"{"score":4,"total":5,"percentage":80,"iq_estimate":118,"completed_at_ms":1700000000000,"time_spent_secs":150}"#;

#[test]
fn parse_stored_reads_a_valid_result() {
    let result = parse_stored(Some(STORED)).unwrap();
    assert_eq!(result.score, 4);
    assert_eq!(result.total, 5);
    assert_eq!(result.iq_estimate, 118);
    assert!(result.breakdown.is_empty());
}

#[test]
fn parse_stored_treats_missing_and_malformed_as_absent() {
    assert_eq!(parse_stored(None), None);
    assert_eq!(parse_stored(Some("not json")), None);
    assert_eq!(parse_stored(Some(r#"{"score":1}"#)), None);
}

#[test]
fn parse_stored_rejects_score_above_total() {
    let raw = STORED.replace(r#""score":4"#, r#""score":9"#);
    assert_eq!(parse_stored(Some(&raw)), None);
}

#[test]
fn time_bar_caps_at_full() {
    assert!((time_bar_percent(900) - 50.0).abs() < f64::EPSILON);
    assert!((time_bar_percent(3_600) - 100.0).abs() < f64::EPSILON);
    assert!(time_bar_percent(0).abs() < f64::EPSILON);
}

#[test]
fn tally_text_lists_wins_losses_draws() {
    assert_eq!(tally_text(Tally { wins: 3, losses: 1, draws: 2 }), "3W / 1L / 2D");
}
