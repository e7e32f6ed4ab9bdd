//! Memory-sequence game.
//!
//! The AI shows a sequence of pad flashes; the player repeats it. A full
//! correct repetition appends exactly one random step and replays. The first
//! wrong press ends the run.

use rand::Rng;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

pub const PAD_COUNT: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    #[error("pad {0} does not exist")]
    NoSuchPad(u8),
    #[error("sequence is still playing")]
    StillShowing,
    #[error("run is over")]
    RunOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryPhase {
    /// The UI is playing the sequence back; input is locked.
    Showing,
    /// Waiting for the player to repeat the sequence.
    Input,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Right pad, more of the sequence remains.
    Correct,
    /// Sequence completed; a step was appended and playback should start.
    RoundComplete,
    /// Wrong pad; the run has ended.
    Mistake { expected: u8 },
}

#[derive(Clone, Debug)]
pub struct MemoryGame {
    sequence: Vec<u8>,
    cursor: usize,
    phase: MemoryPhase,
}

impl MemoryGame {
    /// Start a run with a one-step sequence.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { sequence: vec![random_pad(rng)], cursor: 0, phase: MemoryPhase::Showing }
    }

    #[must_use]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    #[must_use]
    pub fn phase(&self) -> MemoryPhase {
        self.phase
    }

    /// Presses made so far in the current repetition.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Sequences fully repeated in this run.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounds_completed(&self) -> u32 {
        self.sequence.len().saturating_sub(1) as u32
    }

    /// Playback finished; accept input.
    pub fn finish_playback(&mut self) {
        if self.phase == MemoryPhase::Showing {
            self.phase = MemoryPhase::Input;
            self.cursor = 0;
        }
    }

    /// Register a pad press.
    ///
    /// # Errors
    ///
    /// Fails for a nonexistent pad, during playback, or after the run ended.
    pub fn press<R: Rng + ?Sized>(&mut self, pad: u8, rng: &mut R) -> Result<PressOutcome, MemoryError> {
        if pad >= PAD_COUNT {
            return Err(MemoryError::NoSuchPad(pad));
        }
        match self.phase {
            MemoryPhase::Showing => return Err(MemoryError::StillShowing),
            MemoryPhase::Over => return Err(MemoryError::RunOver),
            MemoryPhase::Input => {}
        }

        let expected = self.sequence[self.cursor];
        if pad != expected {
            self.phase = MemoryPhase::Over;
            return Ok(PressOutcome::Mistake { expected });
        }

        self.cursor += 1;
        if self.cursor < self.sequence.len() {
            return Ok(PressOutcome::Correct);
        }

        self.sequence.push(random_pad(rng));
        self.cursor = 0;
        self.phase = MemoryPhase::Showing;
        Ok(PressOutcome::RoundComplete)
    }
}

fn random_pad<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(0..PAD_COUNT)
}
