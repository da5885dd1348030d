//! Search module for the tic-tac-trio AI
//!
//! Contains depth-limited minimax with alpha-beta pruning over the
//! in-place board.

pub mod alphabeta;

pub use alphabeta::{depth_for_size, select_move, SearchResult, SearchStats, Searcher, INF};
