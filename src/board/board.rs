//! Board structure with one bitboard per mark

use super::bitboard::{Bitboard, BitboardIter};
use super::{Mark, Pos, MAX_SIZE, MIN_SIZE};
use crate::error::{Error, Result};

/// Square game board, 3x3 up to 8x8.
///
/// Equality is structural: two boards are equal when they have the same
/// size and the same marks in the same cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    x: Bitboard,
    o: Bitboard,
    y: Bitboard,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`Error::InvalidSize`] outside `3..=8`; callers growing the
    /// board between rounds should clamp with [`super::clamp_size`] first.
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(Error::InvalidSize {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        Ok(Self {
            size,
            x: Bitboard::new(),
            o: Bitboard::new(),
            y: Bitboard::new(),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check that a position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        if self.x.get(pos) {
            Mark::X
        } else if self.o.get(pos) {
            Mark::O
        } else if self.y.get(pos) {
            Mark::Y
        } else {
            Mark::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.occupied().get(pos)
    }

    /// Place `mark` on an empty cell.
    ///
    /// Every `apply` made during search is paired with exactly one
    /// [`Board::undo`] before control returns to the caller.
    #[inline]
    pub fn apply(&mut self, pos: Pos, mark: Mark) {
        debug_assert!(self.contains(pos));
        debug_assert!(self.is_empty(pos), "apply on occupied cell {pos}");
        if let Some(owned) = self.marks_mut(mark) {
            owned.set(pos);
        }
    }

    /// Return a cell to empty
    #[inline]
    pub fn undo(&mut self, pos: Pos) {
        self.x.clear(pos);
        self.o.clear(pos);
        self.y.clear(pos);
    }

    /// Get bitboard for a mark (returns None for Empty)
    #[inline]
    pub fn marks_of(&self, mark: Mark) -> Option<Bitboard> {
        match mark {
            Mark::X => Some(self.x),
            Mark::O => Some(self.o),
            Mark::Y => Some(self.y),
            Mark::Empty => None,
        }
    }

    #[inline]
    fn marks_mut(&mut self, mark: Mark) -> Option<&mut Bitboard> {
        match mark {
            Mark::X => Some(&mut self.x),
            Mark::O => Some(&mut self.o),
            Mark::Y => Some(&mut self.y),
            Mark::Empty => None,
        }
    }

    #[inline]
    fn occupied(&self) -> Bitboard {
        self.x | self.o | self.y
    }

    /// Empty cells in row-major order.
    ///
    /// The iterator snapshots the board, so moves may be applied and undone
    /// while it is being consumed.
    #[inline]
    pub fn available_moves(&self) -> BitboardIter {
        (Bitboard::full(self.size) & !self.occupied()).iter_ones()
    }

    /// Number of empty cells
    #[inline]
    pub fn available_count(&self) -> usize {
        (Bitboard::full(self.size) & !self.occupied()).count() as usize
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.occupied().count() as usize
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.available_count() == 0
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    /// Every cell with its mark, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        Bitboard::full(self.size)
            .iter_ones()
            .map(move |pos| (pos, self.get(pos)))
    }
}
