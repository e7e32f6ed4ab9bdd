//! AI games hub state: which game is open and the lifetime stats.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided by `App` so the games page records outcomes and the results page
//! shows the same tallies. Stats are loaded from `localStorage` once after
//! hydration; each recording method reports whether anything changed so the
//! caller knows to persist.

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

use engine::games::rps::Outcome;
use engine::games::tictactoe::{RoundStatus, TicTacToe};
use engine::games::{GameKind, GameStats, STATS_STORAGE_KEY, Tally};

use crate::util::storage;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GamesState {
    /// Game currently open, `None` on the selection grid.
    pub selected: Option<GameKind>,
    pub stats: GameStats,
    pub stats_loaded: bool,
}

impl GamesState {
    /// Adopt stats read from storage. Outcomes recorded before the load are kept.
    pub fn load(&mut self, stored: Option<GameStats>) {
        if self.stats_loaded {
            return;
        }
        let stored = stored.unwrap_or_default();
        let current = self.stats;
        self.stats = GameStats {
            rock_paper_scissors: add_tally(stored.rock_paper_scissors, current.rock_paper_scissors),
            tic_tac_toe: add_tally(stored.tic_tac_toe, current.tic_tac_toe),
            memory_best: stored.memory_best.max(current.memory_best),
            speed_math_best: stored.speed_math_best.max(current.speed_math_best),
        };
        self.stats_loaded = true;
    }

    pub fn open(&mut self, game: GameKind) {
        self.selected = Some(game);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn record_rps(&mut self, outcome: Outcome) {
        let tally = &mut self.stats.rock_paper_scissors;
        match outcome {
            Outcome::Win => tally.wins += 1,
            Outcome::Lose => tally.losses += 1,
            Outcome::Draw => tally.draws += 1,
        }
    }

    /// Count a finished tic-tac-toe round; `false` while the round is still live.
    pub fn record_tic_tac_toe(&mut self, status: RoundStatus) -> bool {
        let tally = &mut self.stats.tic_tac_toe;
        match status {
            RoundStatus::Won { by, .. } if by == TicTacToe::PLAYER => tally.wins += 1,
            RoundStatus::Won { .. } => tally.losses += 1,
            RoundStatus::Draw => tally.draws += 1,
            RoundStatus::Turn(_) => return false,
        }
        true
    }

    pub fn record_memory(&mut self, rounds: u32) -> bool {
        self.stats.record_memory(rounds)
    }

    pub fn record_speed_math(&mut self, score: u32) -> bool {
        self.stats.record_speed_math(score)
    }

    /// Write the stats to `localStorage`.
    pub fn save(&self) {
        storage::save_json(STATS_STORAGE_KEY, &self.stats);
    }
}

fn add_tally(a: Tally, b: Tally) -> Tally {
    Tally { wins: a.wins + b.wins, losses: a.losses + b.losses, draws: a.draws + b.draws }
}
