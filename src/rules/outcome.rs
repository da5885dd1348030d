//! Round state machine
//!
//! A round is `InProgress` until a move completes a line (`Won`) or fills
//! the last empty cell without one (`Draw`). Both outcomes are final.

use crate::board::{Board, Mark};

use super::win::is_winner;

/// State of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl RoundStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            RoundStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Status after `mark` has just been placed.
///
/// Only the mover can have completed a line, so only the mover is checked.
pub fn status_after_move(board: &Board, mark: Mark) -> RoundStatus {
    if is_winner(board, mark) {
        RoundStatus::Won(mark)
    } else if board.is_full() {
        RoundStatus::Draw
    } else {
        RoundStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    /// X O Y / O Y X / X X O: full, no line for anyone
    fn drawn_board() -> Board {
        let layout = [
            [Mark::X, Mark::O, Mark::Y],
            [Mark::O, Mark::Y, Mark::X],
            [Mark::X, Mark::X, Mark::O],
        ];
        let mut board = Board::new(3).unwrap();
        for (r, row) in layout.iter().enumerate() {
            for (c, &mark) in row.iter().enumerate() {
                board.apply(Pos::new(r as u8, c as u8), mark);
            }
        }
        board
    }

    #[test]
    fn test_in_progress() {
        let mut board = Board::new(3).unwrap();
        board.apply(Pos::new(0, 0), Mark::X);
        assert_eq!(status_after_move(&board, Mark::X), RoundStatus::InProgress);
        assert!(!RoundStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_win_detected() {
        let mut board = Board::new(3).unwrap();
        for c in 0..3 {
            board.apply(Pos::new(1, c), Mark::O);
        }
        let status = status_after_move(&board, Mark::O);
        assert_eq!(status, RoundStatus::Won(Mark::O));
        assert!(status.is_terminal());
        assert_eq!(status.winner(), Some(Mark::O));
    }

    #[test]
    fn test_draw_detected() {
        let board = drawn_board();
        for mark in Mark::PLAYERS {
            assert!(!is_winner(&board, mark));
        }
        assert_eq!(status_after_move(&board, Mark::O), RoundStatus::Draw);
        assert_eq!(board.available_moves().count(), 0);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let layout = [
            [Mark::X, Mark::O, Mark::Y],
            [Mark::X, Mark::Y, Mark::O],
            [Mark::X, Mark::O, Mark::Y],
        ];
        let mut board = Board::new(3).unwrap();
        for (r, row) in layout.iter().enumerate() {
            for (c, &mark) in row.iter().enumerate() {
                board.apply(Pos::new(r as u8, c as u8), mark);
            }
        }
        assert!(board.is_full());
        assert_eq!(status_after_move(&board, Mark::X), RoundStatus::Won(Mark::X));
    }
}
