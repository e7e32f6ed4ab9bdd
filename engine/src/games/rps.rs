//! Rock-paper-scissors against a frequency-counting opponent.
//!
//! The AI plays randomly for the first [`WARMUP_ROUNDS`] rounds, then counters
//! whichever move the player chose most often in the last
//! [`WINDOW`] rounds. Ties resolve toward the later move in
//! rock, paper, scissors order.

use rand::Rng;

#[cfg(test)]
#[path = "rps_test.rs"]
mod rps_test;

pub const WARMUP_ROUNDS: usize = 3;
pub const WINDOW: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Rock => "🪨",
            Self::Paper => "📄",
            Self::Scissors => "✂️",
        }
    }

    /// The move that beats `self`.
    #[must_use]
    pub fn counter(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }

    #[must_use]
    pub fn beats(self, other: Self) -> bool {
        other.counter() == self
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Result of a round from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    #[must_use]
    pub fn decide(player: Move, ai: Move) -> Self {
        if player == ai {
            Self::Draw
        } else if player.beats(ai) {
            Self::Win
        } else {
            Self::Lose
        }
    }

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Self::Win => "You Win!",
            Self::Lose => "AI Wins!",
            Self::Draw => "Draw!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub player: Move,
    pub ai: Move,
    pub outcome: Outcome,
}

/// A running match.
#[derive(Clone, Debug, Default)]
pub struct RpsMatch {
    history: Vec<Round>,
    player_score: u32,
    ai_score: u32,
}

impl RpsMatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    #[must_use]
    pub fn last_round(&self) -> Option<&Round> {
        self.history.last()
    }

    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    #[must_use]
    pub fn ai_score(&self) -> u32 {
        self.ai_score
    }

    /// One-based number of the round about to be played.
    #[must_use]
    pub fn round_number(&self) -> usize {
        self.history.len() + 1
    }

    /// Choose the AI's move for the next round.
    pub fn ai_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        if self.history.len() < WARMUP_ROUNDS {
            return Move::random(rng);
        }
        predict(&self.history[self.history.len() - WINDOW..]).counter()
    }

    /// Play `player` against the AI and record the round.
    pub fn play<R: Rng + ?Sized>(&mut self, player: Move, rng: &mut R) -> Round {
        let ai = self.ai_move(rng);
        let outcome = Outcome::decide(player, ai);
        match outcome {
            Outcome::Win => self.player_score += 1,
            Outcome::Lose => self.ai_score += 1,
            Outcome::Draw => {}
        }
        let round = Round { player, ai, outcome };
        self.history.push(round);
        round
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Most frequent player move in `recent`; ties go to the later move.
fn predict(recent: &[Round]) -> Move {
    let count = |m: Move| recent.iter().filter(|r| r.player == m).count();
    Move::ALL
        .into_iter()
        .reduce(|best, m| if count(best) > count(m) { best } else { m })
        .unwrap_or(Move::Rock)
}
