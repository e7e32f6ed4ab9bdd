//! Quiz and game rules shared by the `client` UI and its tests.
//!
//! This crate owns everything in the app that is not rendering: the static
//! question bank, adaptive selection, the IQ heuristic, the quiz session
//! state machine, the persisted result record, and the rule sets for the AI
//! games. It has no browser or async dependencies so it builds and tests
//! natively. Randomness is always injected by the caller.

pub mod adaptive;
pub mod analysis;
pub mod countdown;
pub mod games;
pub mod question;
pub mod result;
pub mod scoring;
pub mod session;
