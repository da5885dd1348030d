//! Rounds and sessions
//!
//! A [`Round`] is one game on a fixed-size board. A [`Session`] strings
//! rounds together: each finished round, won or drawn, grows the next board
//! by one up to 8x8, and the scoreboard keeps a tally per mark.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::board::{clamp_size, Board, Mark, Pos, MAX_SIZE, MIN_SIZE};
use crate::error::{Error, Result};
use crate::rules::{status_after_move, validate_move, winning_line, RoundStatus};
use crate::turn::TurnOrder;

/// One game on a fixed-size board
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    order: TurnOrder,
    turn: usize,
    status: RoundStatus,
    last_move: Option<Pos>,
    moves_played: usize,
}

impl Round {
    /// Start a round; the first seat of `order` moves first.
    pub fn new(size: usize, order: TurnOrder) -> Result<Self> {
        Ok(Self {
            board: Board::new(size)?,
            order,
            turn: 0,
            status: RoundStatus::InProgress,
            last_move: None,
            moves_played: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn order(&self) -> &TurnOrder {
        &self.order
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Mark whose turn it is
    pub fn current_mark(&self) -> Mark {
        self.order.mark_at(self.turn)
    }

    pub fn is_automated_turn(&self) -> bool {
        self.order.is_automated(self.current_mark())
    }

    /// Cells of the completed line once the round is won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        winning_line(&self.board, self.status.winner()?)
    }

    /// Play the current mark at (`row`, `col`).
    ///
    /// Rejects moves off the board or on an occupied cell, and any move
    /// once the round is over. The win check runs once, for the mark just
    /// placed.
    pub fn play(&mut self, row: usize, col: usize) -> Result<RoundStatus> {
        if self.is_over() {
            return Err(Error::RoundOver);
        }
        let pos = validate_move(&self.board, row, col)?;
        let mark = self.current_mark();

        self.board.apply(pos, mark);
        self.last_move = Some(pos);
        self.moves_played += 1;
        self.status = status_after_move(&self.board, mark);

        debug!(%mark, %pos, status = ?self.status, "move played");

        if !self.is_over() {
            self.turn = (self.turn + 1) % self.order.player_count();
        }
        Ok(self.status)
    }

    /// Same as [`Round::play`] with a [`Pos`]
    pub fn play_at(&mut self, pos: Pos) -> Result<RoundStatus> {
        self.play(pos.row as usize, pos.col as usize)
    }
}

/// Tally of finished rounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    wins: HashMap<Mark, u32>,
    draws: u32,
}

impl Scoreboard {
    pub fn wins(&self, mark: Mark) -> u32 {
        self.wins.get(&mark).copied().unwrap_or(0)
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn rounds(&self) -> u32 {
        self.wins.values().sum::<u32>() + self.draws
    }

    fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won(mark) => *self.wins.entry(mark).or_insert(0) += 1,
            RoundStatus::Draw => self.draws += 1,
            RoundStatus::InProgress => {}
        }
    }
}

/// A run of rounds with a growing board
#[derive(Debug, Clone)]
pub struct Session {
    starting_size: usize,
    size: usize,
    order: TurnOrder,
    scoreboard: Scoreboard,
}

impl Session {
    /// New session; `starting_size` must be a playable size.
    pub fn new(starting_size: usize, order: TurnOrder) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&starting_size) {
            return Err(Error::InvalidSize {
                size: starting_size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        Ok(Self {
            starting_size,
            size: starting_size,
            order,
            scoreboard: Scoreboard::default(),
        })
    }

    /// Board size of the next round
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn order(&self) -> &TurnOrder {
        &self.order
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Number of the next round, from 1
    pub fn round_number(&self) -> u32 {
        self.scoreboard.rounds() + 1
    }

    pub fn at_max_size(&self) -> bool {
        self.size >= MAX_SIZE
    }

    pub fn start_round(&self) -> Result<Round> {
        info!(size = self.size, players = self.order.player_count(), "starting round");
        Round::new(self.size, self.order)
    }

    /// Record a finished round and grow the board.
    ///
    /// Returns the size of the next round. Unfinished rounds are ignored.
    pub fn finish_round(&mut self, round: &Round) -> usize {
        let status = round.status();
        if !status.is_terminal() {
            return self.size;
        }
        self.scoreboard.record(status);
        self.size = clamp_size(self.size + 1);
        info!(outcome = ?status, next_size = self.size, "round finished");
        self.size
    }

    /// Back to the starting size with a clean scoreboard
    pub fn reset(&mut self) {
        self.size = self.starting_size;
        self.scoreboard = Scoreboard::default();
    }
}
