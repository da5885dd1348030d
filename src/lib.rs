//! Three-player tic-tac-toe with a growing board
//!
//! Two humans (`X` and `Y`) and the computer (`O`) take turns on a board
//! that starts at 3x3 and grows by one after every finished round, up to
//! 8x8. A full row, column or either diagonal wins.
//!
//! # Architecture
//!
//! - [`board`]: Bitboard grid with in-place apply/undo
//! - [`rules`]: Win detection, move validation, round outcome
//! - [`turn`]: Seating and turn rotation
//! - [`eval`]: Terminal evaluation for the computer
//! - [`search`]: Depth-limited minimax with alpha-beta pruning
//! - [`engine`]: Move selection facade with timing and logging
//! - [`session`]: Rounds, scoreboard and board growth
//! - [`config`]: TOML configuration
//! - [`console`] and [`ui`]: Terminal and GUI front-ends
//!
//! # Quick Start
//!
//! ```
//! use tictactrio::{select_move, Board, Mark, Pos, TurnOrder};
//!
//! let mut board = Board::new(3).unwrap();
//! board.apply(Pos::new(0, 0), Mark::O);
//! board.apply(Pos::new(0, 1), Mark::O);
//! board.apply(Pos::new(1, 1), Mark::X);
//!
//! // The computer completes its row
//! assert_eq!(select_move(&board, &TurnOrder::trio()), Some(Pos::new(0, 2)));
//! ```
//!
//! # Search Depth
//!
//! Depth shrinks as the board grows: 6 plies up to 3x3, 4 on 4x4 and 3
//! beyond. Scores are +10 for a computer line, -10 for any human line and
//! 0 otherwise.

pub mod board;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod turn;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{clamp_size, Board, Mark, Pos, MAX_SIZE, MIN_SIZE};
pub use config::AppConfig;
pub use engine::{AIEngine, MoveResult, SearchConfig};
pub use error::{Error, Result};
pub use rules::{is_winner, RoundStatus};
pub use search::select_move;
pub use session::{Round, Scoreboard, Session};
pub use turn::{PlayerCount, TurnOrder};
