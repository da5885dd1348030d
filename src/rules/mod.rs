//! Game rules for tic-tac-trio
//!
//! This module implements the rule set:
//! - Win conditions (a full row, column or diagonal)
//! - Move legality (on the board, empty cell)
//! - Round outcome (in progress, won, drawn)

pub mod outcome;
pub mod placement;
pub mod win;

// Re-exports for convenient access
pub use outcome::{status_after_move, RoundStatus};
pub use placement::{is_valid_move, validate_move};
pub use win::{check_winner, is_winner, lines, winning_line};
