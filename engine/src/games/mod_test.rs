use super::*;

#[test]
fn game_ids_are_distinct() {
    let mut ids: Vec<&str> = GameKind::ALL.iter().map(|g| g.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), GameKind::ALL.len());
}

#[test]
fn tally_counts_played_rounds() {
    let tally = Tally { wins: 2, losses: 3, draws: 1 };
    assert_eq!(tally.played(), 6);
}

#[test]
fn memory_best_only_increases() {
    let mut stats = GameStats::default();
    assert!(stats.record_memory(4));
    assert!(!stats.record_memory(2));
    assert!(!stats.record_memory(4));
    assert_eq!(stats.memory_best, 4);
}

#[test]
fn speed_math_best_only_increases() {
    let mut stats = GameStats::default();
    assert!(stats.record_speed_math(7));
    assert!(stats.record_speed_math(9));
    assert!(!stats.record_speed_math(1));
    assert_eq!(stats.speed_math_best, 9);
}

#[test]
fn stats_tolerate_missing_fields() {
    let stats: GameStats = serde_json::from_str(r#"{"memory_best": 3}"#).expect("parse");
    assert_eq!(stats.memory_best, 3);
    assert_eq!(stats.rock_paper_scissors, Tally::default());
    assert_eq!(stats.games_played(), 0);
}
