//! Depth-limited minimax with alpha-beta pruning
//!
//! The computer is the maximizing side; every human ply is a minimizing
//! ply. Scores come only from terminal evaluation (+10, -10 or 0).
//!
//! # Features
//!
//! - Fixed depth budget by board size (6 / 4 / 3)
//! - Row-major move order with first-found tie-break, so results are
//!   deterministic
//! - In-place apply/undo on a single board, no per-ply copies
//! - Pruning can be switched off to cross-check scores and node counts
//!
//! # Example
//!
//! ```
//! use tictactrio::board::{Board, Mark, Pos};
//! use tictactrio::search::{depth_for_size, Searcher};
//! use tictactrio::TurnOrder;
//!
//! let mut board = Board::new(3).unwrap();
//! board.apply(Pos::new(0, 0), Mark::O);
//! board.apply(Pos::new(0, 1), Mark::O);
//!
//! let mut searcher = Searcher::new(TurnOrder::trio());
//! let result = searcher.search(&board, depth_for_size(board.size()));
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! ```

use crate::board::{Board, Pos};
use crate::eval::{evaluate, is_decisive, Score};
use crate::turn::TurnOrder;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = Score::WIN * 100;

/// Depth budget for a board of `size`.
///
/// A fixed lookup that trades search quality for speed on larger boards.
#[inline]
pub fn depth_for_size(size: usize) -> i8 {
    match size {
        0..=3 => 6,
        4 => 4,
        _ => 3,
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Times a node stopped early because `beta <= alpha`
    pub cutoffs: u64,
    /// Nodes that returned without expanding (win, full board, depth 0)
    pub terminal_nodes: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` if the board was full or already decided
    pub best_move: Option<Pos>,
    /// Score of the best move from the computer's point of view
    pub score: i32,
    /// Depth budget used
    pub depth: i8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Minimax searcher for the automated seat of a [`TurnOrder`].
#[derive(Debug, Clone)]
pub struct Searcher {
    order: TurnOrder,
    pruning: bool,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher with alpha-beta pruning.
    #[must_use]
    pub fn new(order: TurnOrder) -> Self {
        Self::with_pruning(order, true)
    }

    /// Plain minimax: visits every node within the depth budget.
    #[must_use]
    pub fn exhaustive(order: TurnOrder) -> Self {
        Self::with_pruning(order, false)
    }

    #[must_use]
    pub fn with_pruning(order: TurnOrder, pruning: bool) -> Self {
        Self {
            order,
            pruning,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    pub fn order(&self) -> &TurnOrder {
        &self.order
    }

    pub fn is_pruning(&self) -> bool {
        self.pruning
    }

    /// Nodes visited since the last [`Searcher::search`] (or construction)
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search for the computer's best move with a full window.
    ///
    /// Works on a private copy of `board`.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: i8) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut work_board = *board;
        let (score, best_move) = self.minimax(&mut work_board, depth, true, -INF, INF);
        debug_assert_eq!(&work_board, board, "search left the board modified");

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Recursive minimax returning `(score, move)`.
    ///
    /// Terminal checks run in this order: a decisive evaluation, then a
    /// full board (scores 0), then an exhausted depth budget (raw
    /// evaluation). None of them carries a move. The board is restored
    /// before returning.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: i8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        let score = evaluate(board, &self.order);
        if is_decisive(score) {
            self.stats.terminal_nodes += 1;
            return (score, None);
        }

        let remaining = board.available_count();
        if remaining == 0 {
            self.stats.terminal_nodes += 1;
            return (Score::NEUTRAL, None);
        }

        if depth <= 0 {
            self.stats.terminal_nodes += 1;
            return (score, None);
        }

        let mut best_move = None;

        if maximizing {
            let mark = self.order.automated();
            let mut best_score = -INF;

            for mov in board.available_moves() {
                board.apply(mov, mark);
                let (child, _) = self.minimax(board, depth - 1, false, alpha, beta);
                board.undo(mov);

                if child > best_score {
                    best_score = child;
                    best_move = Some(mov);
                }

                alpha = alpha.max(best_score);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }

            (best_score, best_move)
        } else {
            let mark = self.order.human_for_parity(remaining);
            let mut best_score = INF;

            for mov in board.available_moves() {
                board.apply(mov, mark);
                let (child, _) = self.minimax(board, depth - 1, true, alpha, beta);
                board.undo(mov);

                if child < best_score {
                    best_score = child;
                    best_move = Some(mov);
                }

                beta = beta.min(best_score);
                if self.pruning && beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }

            (best_score, best_move)
        }
    }
}

/// Pick the computer's move with the size-derived depth budget.
///
/// Returns `None` when there is nothing to play: the board is full, or a
/// line is already complete. Callers check
/// [`Board::available_moves`] first, or treat `None` as a draw signal.
#[must_use]
pub fn select_move(board: &Board, order: &TurnOrder) -> Option<Pos> {
    Searcher::new(*order)
        .search(board, depth_for_size(board.size()))
        .best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use crate::rules::is_winner;

    fn board_from(size: usize, marks: &[(u8, u8, Mark)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(r, c, m) in marks {
            board.apply(Pos::new(r, c), m);
        }
        board
    }

    fn drawn_board() -> Board {
        board_from(
            3,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::O),
                (0, 2, Mark::Y),
                (1, 0, Mark::O),
                (1, 1, Mark::Y),
                (1, 2, Mark::X),
                (2, 0, Mark::X),
                (2, 1, Mark::X),
                (2, 2, Mark::O),
            ],
        )
    }

    #[test]
    fn test_depth_for_size() {
        assert_eq!(depth_for_size(3), 6);
        assert_eq!(depth_for_size(4), 4);
        assert_eq!(depth_for_size(5), 3);
        assert_eq!(depth_for_size(8), 3);
    }

    #[test]
    fn test_search_completes_own_row() {
        let board = board_from(3, &[(0, 0, Mark::O), (0, 1, Mark::O)]);
        let result = Searcher::new(TurnOrder::trio()).search(&board, 6);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, Score::WIN);

        let shallow = Searcher::new(TurnOrder::trio()).search(&board, 1);
        assert_eq!(shallow.best_move, Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_search_blocks_first_human() {
        // Four cells left after the computer moves, so X replies
        let board = board_from(
            3,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::X),
                (1, 0, Mark::O),
                (2, 2, Mark::O),
            ],
        );
        assert_eq!(select_move(&board, &TurnOrder::trio()), Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_search_blocks_second_human_by_parity() {
        // Three cells left after the computer moves, so Y replies
        let board = board_from(
            3,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::O),
                (1, 2, Mark::X),
                (2, 0, Mark::Y),
                (2, 1, Mark::Y),
            ],
        );
        let result = Searcher::new(TurnOrder::trio()).search(&board, 6);
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
        assert_eq!(result.score, Score::NEUTRAL);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = drawn_board();
        let result = Searcher::new(TurnOrder::trio()).search(&board, 6);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, Score::NEUTRAL);
        assert_eq!(select_move(&board, &TurnOrder::trio()), None);
        assert_eq!(board.available_moves().count(), 0);
    }

    #[test]
    fn test_decided_board_returns_immediately() {
        let board = board_from(3, &[(1, 0, Mark::Y), (1, 1, Mark::Y), (1, 2, Mark::Y)]);
        let mut searcher = Searcher::new(TurnOrder::trio());
        let result = searcher.search(&board, 6);
        assert_eq!(result.score, Score::LOSS);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_decisive_beats_zero_depth() {
        let board = board_from(3, &[(0, 0, Mark::O), (1, 1, Mark::O), (2, 2, Mark::O)]);
        let mut searcher = Searcher::new(TurnOrder::trio());
        let mut work = board;
        assert_eq!(searcher.minimax(&mut work, 0, true, -INF, INF), (Score::WIN, None));
    }

    #[test]
    fn test_zero_depth_returns_raw_evaluation() {
        let board = board_from(3, &[(0, 0, Mark::O)]);
        let mut searcher = Searcher::new(TurnOrder::trio());
        let mut work = board;
        assert_eq!(searcher.minimax(&mut work, 0, true, -INF, INF), (0, None));
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut board = board_from(4, &[(0, 0, Mark::X), (1, 1, Mark::O), (2, 3, Mark::Y)]);
        let before = board;
        let mut searcher = Searcher::new(TurnOrder::trio());
        let _ = searcher.minimax(&mut board, 3, true, -INF, INF);
        assert_eq!(board, before);
    }

    #[test]
    fn test_select_move_is_deterministic() {
        let board = board_from(4, &[(0, 0, Mark::X), (1, 2, Mark::O), (3, 3, Mark::Y)]);
        let first = select_move(&board, &TurnOrder::trio());
        let second = select_move(&board, &TurnOrder::trio());
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_pruning_matches_exhaustive_scores() {
        let cases = [
            (Board::new(3).unwrap(), 6),
            (board_from(3, &[(1, 1, Mark::X), (0, 0, Mark::O)]), 6),
            (board_from(4, &[(0, 0, Mark::X), (0, 1, Mark::O), (1, 1, Mark::Y)]), 3),
            (board_from(4, &[(0, 0, Mark::O), (0, 1, Mark::O), (0, 2, Mark::O)]), 4),
            (board_from(5, &[(2, 2, Mark::X)]), 2),
        ];

        for (board, depth) in cases {
            for maximizing in [true, false] {
                let mut pruned = Searcher::new(TurnOrder::trio());
                let mut full = Searcher::exhaustive(TurnOrder::trio());
                let mut a = board;
                let mut b = board;
                let (ps, _) = pruned.minimax(&mut a, depth, maximizing, -INF, INF);
                let (fs, _) = full.minimax(&mut b, depth, maximizing, -INF, INF);
                assert_eq!(ps, fs, "board {board:?} depth {depth} max {maximizing}");
            }
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let board = Board::new(3).unwrap();
        let pruned = Searcher::new(TurnOrder::trio()).search(&board, 6);
        let full = Searcher::exhaustive(TurnOrder::trio()).search(&board, 6);

        assert_eq!(pruned.score, full.score);
        assert!(pruned.nodes < full.nodes, "{} >= {}", pruned.nodes, full.nodes);
        assert!(pruned.stats.cutoffs > 0);
        assert_eq!(full.stats.cutoffs, 0);
    }

    /// Computer moves on `board`, then every human reply is tried.
    fn assert_never_loses(board: &mut Board, order: &TurnOrder) {
        let Some(mov) = select_move(board, order) else {
            return;
        };
        board.apply(mov, order.automated());
        if !is_winner(board, order.automated()) && !board.is_full() {
            let human = order.human_for_parity(board.available_count());
            for reply in board.available_moves() {
                board.apply(reply, human);
                assert!(!is_winner(board, human), "lost after {board:?}");
                if !board.is_full() {
                    assert_never_loses(board, order);
                }
                board.undo(reply);
            }
        }
        board.undo(mov);
    }

    #[test]
    fn test_never_loses_from_empty_board() {
        let order = TurnOrder::trio();
        let mut board = Board::new(3).unwrap();
        assert_never_loses(&mut board, &order);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_duel_blocks_single_human() {
        // Five cells remain after the computer moves; with one human it is X who replies
        let board = board_from(3, &[(0, 0, Mark::X), (1, 1, Mark::X), (0, 2, Mark::O)]);
        assert_eq!(select_move(&board, &TurnOrder::duel()), Some(Pos::new(2, 2)));
    }
}
