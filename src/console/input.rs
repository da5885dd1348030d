//! Parsing of typed moves

use crate::error::{Error, Result};

/// Parse `"row,col"` into zero-based coordinates.
///
/// Whitespace around either number is ignored. Anything that is not exactly
/// two non-negative integers is [`Error::InvalidInput`]; bounds are checked
/// later against the board.
pub fn parse_move(input: &str) -> Result<(usize, usize)> {
    let invalid = || Error::InvalidInput {
        input: input.trim().to_string(),
    };

    let mut parts = input.trim().split(',');
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok((row, col))
}

/// `y` or `yes`, any case
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
