use super::*;

#[test]
fn band_boundaries() {
    assert_eq!(IqBand::classify(160), IqBand::Genius);
    assert_eq!(IqBand::classify(140), IqBand::Genius);
    assert_eq!(IqBand::classify(139), IqBand::VerySuperior);
    assert_eq!(IqBand::classify(120), IqBand::Superior);
    assert_eq!(IqBand::classify(110), IqBand::HighAverage);
    assert_eq!(IqBand::classify(90), IqBand::Average);
    assert_eq!(IqBand::classify(89), IqBand::LowAverage);
    assert_eq!(IqBand::classify(70), IqBand::BelowAverage);
}

#[test]
fn band_copy_is_populated() {
    let band = IqBand::classify(125);
    assert_eq!(band.label(), "Superior");
    assert_eq!(band.description(), "Above average intelligence");
    assert_eq!(band.css_modifier(), "superior");
}

#[test]
fn ranking_thresholds() {
    assert_eq!(Ranking::for_score(131), Ranking { top_percent: 2, percentile: 98 });
    assert_eq!(Ranking::for_score(115), Ranking { top_percent: 15, percentile: 85 });
    assert_eq!(Ranking::for_score(100), Ranking { top_percent: 50, percentile: 50 });
    assert_eq!(Ranking::for_score(99), Ranking { top_percent: 85, percentile: 15 });
    assert_eq!(Ranking::for_score(131).percentile_label(), "98th");
}

#[test]
fn pace_labels() {
    assert_eq!(pace_label(12.0), "Quick thinker!");
    assert_eq!(pace_label(30.0), "Good pace");
    assert_eq!(pace_label(75.0), "Thoughtful approach");
}

#[test]
fn strengths_follow_score() {
    assert_eq!(strengths(130)[0], "Exceptional pattern recognition");
    assert_eq!(strengths(105)[0], "Good logical thinking");
    assert_eq!(strengths(80)[0], "Room for cognitive development");
    assert_eq!(NEXT_STEPS.len(), 4);
}

#[test]
fn duration_formats_minutes_and_seconds() {
    assert_eq!(format_duration(125), "2m 5s");
    assert_eq!(format_duration(0), "0m 0s");
}

#[test]
fn completed_at_formats_utc() {
    // 2023-11-14T22:13:20Z
    assert_eq!(
        format_completed_at(1_700_000_000_000).as_deref(),
        Some("November 14, 2023 at 22:13 UTC")
    );
}

#[test]
fn completed_at_out_of_range_is_none() {
    assert!(format_completed_at(i64::MAX).is_none());
}
