//! Tic-tac-toe against a shallow greedy opponent.
//!
//! The AI takes an immediate win if one exists, otherwise blocks the player's
//! immediate win, otherwise takes the center, then a random free corner, then
//! any free cell. There is no search beyond one ply.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::Tally;

#[cfg(test)]
#[path = "tictactoe_test.rs"]
mod tictactoe_test;

pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicTacToeError {
    #[error("cell {0} is outside the board")]
    OutOfBounds(usize),
    #[error("cell {0} is already taken")]
    Occupied(usize),
    #[error("round is over")]
    RoundOver,
    #[error("it is not the player's turn")]
    NotPlayersTurn,
}

/// 3x3 board in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board([Option<Mark>; 9]);

impl Board {
    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.0.get(cell).copied().flatten()
    }

    /// Place `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`TicTacToeError::OutOfBounds`] or [`TicTacToeError::Occupied`].
    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<(), TicTacToeError> {
        let slot = self.0.get_mut(cell).ok_or(TicTacToeError::OutOfBounds(cell))?;
        if slot.is_some() {
            return Err(TicTacToeError::Occupied(cell));
        }
        *slot = Some(mark);
        Ok(())
    }

    #[must_use]
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..9).filter(|&i| self.0[i].is_none()).collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// The completed line and its owner, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            match (self.0[a], self.0[b], self.0[c]) {
                (Some(m), Some(n), Some(o)) if m == n && n == o => Some((m, line)),
                _ => None,
            }
        })
    }

    /// A free cell that would complete a line for `mark`.
    #[must_use]
    pub fn completing_cell(&self, mark: Mark) -> Option<usize> {
        self.empty_cells().into_iter().find(|&cell| {
            let mut probe = *self;
            probe.0[cell] = Some(mark);
            probe.winning_line().is_some_and(|(m, _)| m == mark)
        })
    }
}

/// Pick the AI's cell: win, block, center, random corner, any free cell.
pub fn ai_move<R: Rng + ?Sized>(board: &Board, ai: Mark, rng: &mut R) -> Option<usize> {
    if let Some(cell) = board.completing_cell(ai) {
        return Some(cell);
    }
    if let Some(cell) = board.completing_cell(ai.other()) {
        return Some(cell);
    }
    if board.get(CENTER).is_none() {
        return Some(CENTER);
    }
    let corners: Vec<usize> = CORNERS.into_iter().filter(|&c| board.get(c).is_none()).collect();
    if let Some(&corner) = corners.choose(rng) {
        return Some(corner);
    }
    board.empty_cells().choose(rng).copied()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    /// Waiting on `Mark` to move.
    Turn(Mark),
    Won { by: Mark, line: [usize; 3] },
    Draw,
}

/// A series of rounds; the player is always X and opens each round.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    board: Board,
    status: RoundStatus,
    tally: Tally,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    pub const PLAYER: Mark = Mark::X;
    pub const AI: Mark = Mark::O;

    #[must_use]
    pub fn new() -> Self {
        Self { board: Board::default(), status: RoundStatus::Turn(Self::PLAYER), tally: Tally::default() }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self.status, RoundStatus::Turn(_))
    }

    /// Place the player's mark.
    ///
    /// # Errors
    ///
    /// Fails if the round is over, it is the AI's turn, or the cell is invalid.
    pub fn play_player(&mut self, cell: usize) -> Result<RoundStatus, TicTacToeError> {
        match self.status {
            RoundStatus::Turn(Mark::X) => {}
            RoundStatus::Turn(Mark::O) => return Err(TicTacToeError::NotPlayersTurn),
            _ => return Err(TicTacToeError::RoundOver),
        }
        self.board.place(cell, Self::PLAYER)?;
        Ok(self.settle(Self::AI))
    }

    /// Let the AI move. Returns the chosen cell, or `None` if it is not the AI's turn.
    pub fn play_ai<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.status != RoundStatus::Turn(Self::AI) {
            return None;
        }
        let cell = ai_move(&self.board, Self::AI, rng)?;
        self.board.place(cell, Self::AI).ok()?;
        self.settle(Self::PLAYER);
        Some(cell)
    }

    /// Clear the board, keeping the tally.
    pub fn new_round(&mut self) {
        self.board = Board::default();
        self.status = RoundStatus::Turn(Self::PLAYER);
    }

    fn settle(&mut self, next: Mark) -> RoundStatus {
        self.status = if let Some((by, line)) = self.board.winning_line() {
            if by == Self::PLAYER {
                self.tally.wins += 1;
            } else {
                self.tally.losses += 1;
            }
            RoundStatus::Won { by, line }
        } else if self.board.is_full() {
            self.tally.draws += 1;
            RoundStatus::Draw
        } else {
            RoundStatus::Turn(next)
        };
        self.status
    }
}
