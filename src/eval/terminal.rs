//! Terminal evaluation from the computer's point of view

use crate::board::Board;
use crate::rules::is_winner;
use crate::turn::TurnOrder;

/// Scores returned by [`evaluate`]
pub struct Score;

impl Score {
    /// Computer holds a full line
    pub const WIN: i32 = 10;
    /// A human holds a full line
    pub const LOSS: i32 = -10;
    /// No line, whether or not the board is full
    pub const NEUTRAL: i32 = 0;
}

/// Evaluate the board for the automated player in `order`.
///
/// Returns [`Score::WIN`] if the automated mark has a line, [`Score::LOSS`]
/// if any human mark has one, [`Score::NEUTRAL`] otherwise. Non-terminal
/// positions also score neutral, so the result only means something next
/// to the search's terminal and depth checks.
#[must_use]
pub fn evaluate(board: &Board, order: &TurnOrder) -> i32 {
    let ai_wins = is_winner(board, order.automated());
    let human_wins = order.humans().filter(|&m| is_winner(board, m)).count();
    debug_assert!(
        usize::from(ai_wins) + human_wins <= 1,
        "several marks hold a winning line"
    );

    if ai_wins {
        Score::WIN
    } else if human_wins > 0 {
        Score::LOSS
    } else {
        Score::NEUTRAL
    }
}

/// True for a win or a loss
#[inline]
pub fn is_decisive(score: i32) -> bool {
    score == Score::WIN || score == Score::LOSS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Mark, Pos};

    fn with_row(mark: Mark) -> Board {
        let mut board = Board::new(3).unwrap();
        for c in 0..3 {
            board.apply(Pos::new(0, c), mark);
        }
        board
    }

    #[test]
    fn test_empty_board_neutral() {
        let board = Board::new(3).unwrap();
        assert_eq!(evaluate(&board, &TurnOrder::trio()), Score::NEUTRAL);
    }

    #[test]
    fn test_automated_win() {
        let board = with_row(Mark::O);
        assert_eq!(evaluate(&board, &TurnOrder::trio()), Score::WIN);
        assert!(is_decisive(Score::WIN));
    }

    #[test]
    fn test_either_human_loses_for_ai() {
        assert_eq!(evaluate(&with_row(Mark::X), &TurnOrder::trio()), Score::LOSS);
        assert_eq!(evaluate(&with_row(Mark::Y), &TurnOrder::trio()), Score::LOSS);
    }

    #[test]
    fn test_duel_ignores_unseated_mark() {
        // Y is not at a two-player table
        assert_eq!(evaluate(&with_row(Mark::Y), &TurnOrder::duel()), Score::NEUTRAL);
        assert_eq!(evaluate(&with_row(Mark::X), &TurnOrder::duel()), Score::LOSS);
    }

    #[test]
    fn test_non_terminal_is_neutral() {
        let mut board = Board::new(4).unwrap();
        board.apply(Pos::new(0, 0), Mark::O);
        board.apply(Pos::new(0, 1), Mark::O);
        board.apply(Pos::new(0, 2), Mark::O);
        assert_eq!(evaluate(&board, &TurnOrder::trio()), Score::NEUTRAL);
        assert!(!is_decisive(Score::NEUTRAL));
    }
}
