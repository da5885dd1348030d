//! Move legality
//!
//! A move is legal when it lands on the board and the cell is empty. Human
//! input goes through [`validate_move`]; the search only ever draws from
//! [`Board::available_moves`] and never needs it.

use crate::board::{Board, Pos};
use crate::error::{Error, Result};

/// Check a proposed move, reporting why it is illegal
pub fn validate_move(board: &Board, row: usize, col: usize) -> Result<Pos> {
    let size = board.size();
    if row >= size || col >= size {
        return Err(Error::OutOfBounds { row, col, size });
    }
    let pos = Pos::new(row as u8, col as u8);
    if !board.is_empty(pos) {
        return Err(Error::CellOccupied { row, col });
    }
    Ok(pos)
}

/// Check if a move is legal
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.contains(pos) && board.is_empty(pos)
}
