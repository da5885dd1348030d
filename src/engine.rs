//! AI engine facade
//!
//! Wraps the [`Searcher`] for callers that only want "the computer's move
//! on this board": it picks the depth budget, times the search, logs it,
//! and turns an absent move into [`Error::NoLegalMove`].
//!
//! # Example
//!
//! ```
//! use tictactrio::{AIEngine, Board, Mark, Pos, TurnOrder};
//!
//! let mut engine = AIEngine::new(TurnOrder::trio());
//! let mut board = Board::new(3).unwrap();
//! board.apply(Pos::new(1, 1), Mark::X);
//!
//! let result = engine.select_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Board, Pos};
use crate::error::{Error, Result};
use crate::search::{depth_for_size, SearchResult, Searcher};
use crate::turn::TurnOrder;

/// Search options for [`AIEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Alpha-beta pruning; turning it off only costs time
    pub pruning: bool,
    /// Fixed depth instead of the board-size lookup, at least 1
    pub depth_override: Option<i8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            depth_override: None,
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move (+10 win, -10 loss, 0 otherwise)
    pub score: i32,
    /// Depth budget used
    pub depth: i8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Nodes scored without expanding (decided, full or out of depth)
    pub terminal_nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            cutoffs: result.stats.cutoffs,
            terminal_nodes: result.stats.terminal_nodes,
            time_ms,
        }
    }
}

/// Move selection for the automated seat.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
    depth_override: Option<i8>,
}

impl AIEngine {
    /// Engine with pruning and the size-derived depth.
    #[must_use]
    pub fn new(order: TurnOrder) -> Self {
        Self::with_config(order, SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(order: TurnOrder, config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::with_pruning(order, config.pruning),
            depth_override: config.depth_override.map(|d| d.max(1)),
        }
    }

    pub fn order(&self) -> &TurnOrder {
        self.searcher.order()
    }

    /// Depth the next search on `board` will use
    pub fn depth_for(&self, board: &Board) -> i8 {
        self.depth_override
            .unwrap_or_else(|| depth_for_size(board.size()))
    }

    /// Override the depth lookup, `None` restores it.
    ///
    /// A depth below 1 would return no move on an open board, so it is
    /// raised to 1.
    pub fn set_depth_override(&mut self, depth: Option<i8>) {
        self.depth_override = depth.map(|d| d.max(1));
    }

    /// Get the computer's move.
    ///
    /// Fails with [`Error::NoLegalMove`] when the board is full or already
    /// decided; callers may read that as a finished round.
    pub fn select_move(&mut self, board: &Board) -> Result<Pos> {
        self.select_move_with_stats(board)
            .best_move
            .ok_or(Error::NoLegalMove)
    }

    /// Get the computer's move with search statistics.
    #[must_use]
    pub fn select_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let depth = self.depth_for(board);

        let result = self.searcher.search(board, depth);
        let result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        match result.best_move {
            Some(pos) => debug!(
                size = board.size(),
                depth,
                %pos,
                score = result.score,
                nodes = result.nodes,
                cutoffs = result.cutoffs,
                leaves = result.terminal_nodes,
                time_ms = result.time_ms,
                "search complete"
            ),
            None => warn!(
                size = board.size(),
                empty = board.available_count(),
                "search found no legal move"
            ),
        }

        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(TurnOrder::default())
    }
}
