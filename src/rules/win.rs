//! Win condition checking
//!
//! A mark wins by filling an entire line of the board: any row, any
//! column, the main diagonal or the anti-diagonal. On an N x N board that
//! means N in a row, so a 5x5 board needs five.

use crate::board::{Bitboard, Board, Mark, Pos, MAX_SIZE, STRIDE};

/// Lines on the largest board: 8 rows, 8 columns, 2 diagonals
const MAX_LINES: usize = 2 * MAX_SIZE + 2;

/// Line masks for every board size, built at compile time.
/// For size `n` the first `2n + 2` entries are rows, columns, main
/// diagonal and anti-diagonal, in that order.
static LINE_MASKS: [[u64; MAX_LINES]; MAX_SIZE + 1] = build_line_masks();

const fn build_line_masks() -> [[u64; MAX_LINES]; MAX_SIZE + 1] {
    let mut table = [[0u64; MAX_LINES]; MAX_SIZE + 1];
    let mut n = 1;
    while n <= MAX_SIZE {
        let mut i = 0;
        while i < n {
            let mut row = 0u64;
            let mut col = 0u64;
            let mut j = 0;
            while j < n {
                row |= 1u64 << (i * STRIDE + j);
                col |= 1u64 << (j * STRIDE + i);
                j += 1;
            }
            table[n][i] = row;
            table[n][n + i] = col;
            table[n][2 * n] |= 1u64 << (i * STRIDE + i);
            table[n][2 * n + 1] |= 1u64 << (i * STRIDE + (n - 1 - i));
            i += 1;
        }
        n += 1;
    }
    table
}

/// Winning lines for a board of `size`
#[inline]
pub fn lines(size: usize) -> &'static [u64] {
    &LINE_MASKS[size][..2 * size + 2]
}

/// Check if `mark` fills some row, column or diagonal.
///
/// Always false for [`Mark::Empty`].
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    let Some(owned) = board.marks_of(mark) else {
        return false;
    };
    lines(board.size()).iter().any(|&line| owned.covers(line))
}

/// Find the cells of a completed line for `mark`, if one exists
pub fn winning_line(board: &Board, mark: Mark) -> Option<Vec<Pos>> {
    let owned = board.marks_of(mark)?;
    lines(board.size())
        .iter()
        .find(|&&line| owned.covers(line))
        .map(|&line| Bitboard::from_bits(line).iter_ones().collect())
}

/// Check for a winner
///
/// Returns `Some(mark)` if exactly one mark has a line, `None` otherwise.
/// Alternating play can never complete two lines for different marks; in
/// debug builds that state is treated as a bug in the caller.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let mut winners = Mark::PLAYERS.into_iter().filter(|&m| is_winner(board, m));
    let winner = winners.next();
    debug_assert!(
        winners.next().is_none(),
        "more than one mark holds a winning line"
    );
    winner
}
