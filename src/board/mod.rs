//! Board representation for tic-tac-trio

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::{Bitboard, BitboardIter};
pub use board::Board;

/// Smallest playable board (3x3)
pub const MIN_SIZE: usize = 3;
/// Largest playable board (8x8); every cell fits in one `u64`
pub const MAX_SIZE: usize = 8;
/// Row stride of the bit layout, independent of the board in play
pub const STRIDE: usize = MAX_SIZE;

/// Clamp a requested board size into the playable range.
#[inline]
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    /// First human player
    X,
    /// Automated player
    O,
    /// Second human player
    Y,
}

impl Mark {
    /// All player marks, in seating order
    pub const PLAYERS: [Mark; 3] = [Mark::X, Mark::O, Mark::Y];

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Single-character symbol, `' '` for an empty cell
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Y => 'Y',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_SIZE && (col as usize) < MAX_SIZE);
        Self { row, col }
    }

    /// Bit index in the fixed-stride layout
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * STRIDE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / STRIDE) as u8,
            col: (idx % STRIDE) as u8,
        }
    }

    /// Check signed coordinates against a board of `size`
    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
