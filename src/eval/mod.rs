//! Evaluation module for tic-tac-trio positions
//!
//! Only terminal states are scored: a completed line for the computer, a
//! completed line for either human, or nothing. There is no positional
//! heuristic.

pub mod terminal;

pub use terminal::{evaluate, is_decisive, Score};
