//! Single-word bitboard covering boards up to 8x8

use super::{Pos, STRIDE};

/// Bitboard over the fixed 8-wide layout.
/// Bit `row * 8 + col` is set when the cell is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Mask of every cell on a `size` x `size` board
    pub const fn full(size: usize) -> Self {
        let row_mask = (1u64 << size) - 1;
        let mut bits = 0u64;
        let mut row = 0;
        while row < size {
            bits |= row_mask << (row * STRIDE);
            row += 1;
        }
        Self { bits }
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// True when every bit of `mask` is set
    #[inline]
    pub fn covers(self, mask: u64) -> bool {
        self.bits & mask == mask
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate over set bit positions, lowest index first (row-major)
    pub fn iter_ones(self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard::from_bits(self.bits | rhs.bits)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard::from_bits(self.bits & rhs.bits)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    fn not(self) -> Self::Output {
        Bitboard::from_bits(!self.bits)
    }
}

/// Iterator over set bits in a Bitboard.
///
/// Holds its own copy of the word, so the board it came from may be
/// mutated while iterating.
#[derive(Debug, Clone, Copy)]
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_mask_counts() {
        assert_eq!(Bitboard::full(3).count(), 9);
        assert_eq!(Bitboard::full(5).count(), 25);
        assert_eq!(Bitboard::full(8).count(), 64);
        assert_eq!(Bitboard::full(8).bits(), u64::MAX);
    }

    #[test]
    fn test_full_mask_layout() {
        let full = Bitboard::full(3);
        assert!(full.get(Pos::new(0, 2)));
        assert!(full.get(Pos::new(2, 0)));
        assert!(!full.get(Pos::new(0, 3)));
        assert!(!full.get(Pos::new(3, 0)));
    }

    #[test]
    fn test_set_clear() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(4, 7));
        assert!(bb.get(Pos::new(4, 7)));
        assert_eq!(bb.count(), 1);
        bb.clear(Pos::new(4, 7));
        assert!(bb.is_empty());
    }

    #[test]
    fn test_iter_row_major() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(2, 1));
        bb.set(Pos::new(0, 2));
        bb.set(Pos::new(1, 0));
        let order: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(order, vec![Pos::new(0, 2), Pos::new(1, 0), Pos::new(2, 1)]);
        assert_eq!(bb.iter_ones().len(), 3);
    }
}
