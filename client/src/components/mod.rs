//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the quiz and game surfaces. Game panels own their run
//! state locally and report finished outcomes to the shared `GamesState`
//! context.

pub mod answer_review;
pub mod game_card;
pub mod game_header;
pub mod memory_panel;
pub mod navbar;
pub mod progress_bar;
pub mod rps_panel;
pub mod score_board;
pub mod speed_math_panel;
pub mod tic_tac_toe_panel;
