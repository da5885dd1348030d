//! Seating and turn rotation
//!
//! The three-player table seats `X` (human), `O` (computer) and `Y`
//! (human), in that order. The two-player table drops `Y`.

use serde::{Deserialize, Serialize};

use crate::board::Mark;

/// Number of players at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerCount {
    Two,
    #[default]
    Three,
}

/// Fixed rotation of marks with exactly one automated seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnOrder {
    seats: [Mark; 3],
    len: usize,
    automated: Mark,
}

impl TurnOrder {
    /// X, O (computer), Y
    pub const fn trio() -> Self {
        Self {
            seats: [Mark::X, Mark::O, Mark::Y],
            len: 3,
            automated: Mark::O,
        }
    }

    /// X, O (computer)
    pub const fn duel() -> Self {
        Self {
            seats: [Mark::X, Mark::O, Mark::Empty],
            len: 2,
            automated: Mark::O,
        }
    }

    pub const fn for_players(players: PlayerCount) -> Self {
        match players {
            PlayerCount::Two => Self::duel(),
            PlayerCount::Three => Self::trio(),
        }
    }

    #[inline]
    pub fn player_count(&self) -> usize {
        self.len
    }

    /// Mark seated at rotation index `turn` (taken modulo the table size)
    #[inline]
    pub fn mark_at(&self, turn: usize) -> Mark {
        self.seats[turn % self.len]
    }

    /// The computer's mark
    #[inline]
    pub fn automated(&self) -> Mark {
        self.automated
    }

    #[inline]
    pub fn is_automated(&self, mark: Mark) -> bool {
        mark == self.automated
    }

    /// Seated marks in rotation order
    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.seats[..self.len].iter().copied()
    }

    /// Human marks in rotation order
    pub fn humans(&self) -> impl Iterator<Item = Mark> + '_ {
        self.marks().filter(move |&m| m != self.automated)
    }

    /// Mark the search plays for the humans at a minimizing node.
    ///
    /// Picked from the parity of the number of empty cells at the node:
    /// even gives the first human, odd the second. This does not follow the
    /// real rotation; it is kept because changing it changes which moves the
    /// search prefers. With one human, that human always plays.
    #[inline]
    pub fn human_for_parity(&self, remaining: usize) -> Mark {
        let first = self.seats[0];
        if self.len < 3 || remaining % 2 == 0 {
            first
        } else {
            self.seats[2]
        }
    }
}

impl Default for TurnOrder {
    fn default() -> Self {
        Self::trio()
    }
}
