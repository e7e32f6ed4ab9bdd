//! AI-opponent games and their persisted tallies.
//!
//! ARCHITECTURE
//! ============
//! Each game is a plain state struct with methods that take an injected rng.
//! The UI layer owns delays ("thinking", sequence playback) and feeds results
//! back in; nothing here sleeps or schedules.

use serde::{Deserialize, Serialize};

pub mod memory;
pub mod rps;
pub mod speed_math;
pub mod tictactoe;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// localStorage key for [`GameStats`].
pub const STATS_STORAGE_KEY: &str = "aiGameStats";

/// The games offered on the AI games page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameKind {
    RockPaperScissors,
    TicTacToe,
    MemorySequence,
    SpeedMath,
}

impl GameKind {
    pub const ALL: [Self; 4] = [Self::RockPaperScissors, Self::TicTacToe, Self::MemorySequence, Self::SpeedMath];

    /// Stable identifier used in CSS classes.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::RockPaperScissors => "rock-paper-scissors",
            Self::TicTacToe => "tic-tac-toe",
            Self::MemorySequence => "memory-sequence",
            Self::SpeedMath => "speed-math",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::RockPaperScissors => "Rock Paper Scissors",
            Self::TicTacToe => "Tic-Tac-Toe",
            Self::MemorySequence => "Memory Challenge",
            Self::SpeedMath => "Speed Math",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::RockPaperScissors => "Classic game with an AI that learns your patterns",
            Self::TicTacToe => "Strategic board game against a greedy AI",
            Self::MemorySequence => "Remember and repeat increasingly long patterns",
            Self::SpeedMath => "Solve as many problems as you can in 60 seconds",
        }
    }

    #[must_use]
    pub fn difficulty(self) -> &'static str {
        match self {
            Self::RockPaperScissors => "Medium",
            Self::TicTacToe => "Hard",
            Self::MemorySequence => "Expert",
            Self::SpeedMath => "Medium",
        }
    }
}

/// Win/loss/draw counts from the player's side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    #[must_use]
    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// Lifetime game statistics kept in browser storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    #[serde(default)]
    pub rock_paper_scissors: Tally,
    #[serde(default)]
    pub tic_tac_toe: Tally,
    /// Longest sequence fully repeated.
    #[serde(default)]
    pub memory_best: u32,
    #[serde(default)]
    pub speed_math_best: u32,
}

impl GameStats {
    /// Record a memory run; returns `true` if it set a new best.
    pub fn record_memory(&mut self, rounds: u32) -> bool {
        if rounds > self.memory_best {
            self.memory_best = rounds;
            return true;
        }
        false
    }

    /// Record a speed-math round; returns `true` if it set a new best.
    pub fn record_speed_math(&mut self, score: u32) -> bool {
        if score > self.speed_math_best {
            self.speed_math_best = score;
            return true;
        }
        false
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.rock_paper_scissors.played() + self.tic_tac_toe.played()
    }
}
