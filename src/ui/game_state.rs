//! Game state management for the GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::engine::{AIEngine, MoveResult, SearchConfig};
use crate::error::Result;
use crate::session::{Round, Session};
use crate::turn::{PlayerCount, TurnOrder};
use crate::{Mark, Pos};

/// AI computation state
pub enum AiState {
    Idle,
    /// Search running on a worker thread. A finished result is held in
    /// `ready` until the display delay has passed.
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
        ready: Option<MoveResult>,
    },
}

/// Session, current round and the automated player's progress
pub struct GameState {
    pub session: Session,
    pub round: Round,
    pub last_ai_result: Option<MoveResult>,
    pub last_ai_time: Option<Duration>,
    pub ai_state: AiState,
    pub message: Option<String>,

    search: SearchConfig,
    ai_delay: Duration,
    starting_size: usize,
}

impl GameState {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_order(config, config.session.turn_order())
    }

    fn with_order(config: &AppConfig, order: TurnOrder) -> Result<Self> {
        let session = Session::new(config.session.starting_size, order)?;
        let round = session.start_round()?;
        Ok(Self {
            session,
            round,
            last_ai_result: None,
            last_ai_time: None,
            ai_state: AiState::Idle,
            message: None,
            search: config.search,
            ai_delay: Duration::from_millis(config.display.ai_delay_ms),
            starting_size: config.session.starting_size,
        })
    }

    /// Fresh session at the starting size with a new seating
    pub fn new_session(&mut self, players: PlayerCount) -> Result<()> {
        let order = TurnOrder::for_players(players);
        self.session = Session::new(self.starting_size, order)?;
        self.reset_round()
    }

    /// Start the next round once the current one is over
    pub fn next_round(&mut self) -> Result<()> {
        if !self.round.is_over() {
            return Ok(());
        }
        self.reset_round()
    }

    fn reset_round(&mut self) -> Result<()> {
        self.round = self.session.start_round()?;
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.message = None;
        Ok(())
    }

    pub fn current_mark(&self) -> Mark {
        self.round.current_mark()
    }

    pub fn order(&self) -> &TurnOrder {
        self.round.order()
    }

    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }

    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        self.round.winning_line()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && !self.round.is_automated_turn()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.round.is_automated_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move at the given position
    pub fn try_place(&mut self, pos: Pos) -> std::result::Result<(), String> {
        if self.is_over() {
            return Err("Round is over".to_string());
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err("Wait for the computer's move".to_string());
        }
        self.execute_move(pos).map_err(|e| e.to_string())
    }

    /// Play a move for whoever is on turn and close the round when it ends
    fn execute_move(&mut self, pos: Pos) -> Result<()> {
        let status = self.round.play_at(pos)?;
        self.message = None;
        if status.is_terminal() {
            self.session.finish_round(&self.round);
        }
        Ok(())
    }

    /// Start the search on a worker thread over a copy of the board
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = *self.round.board();
        let order = *self.round.order();
        let search = self.search;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(order, search);
            let result = engine.select_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            ready: None,
        };
    }

    /// Commit the computer's move once it is found and the delay has passed
    pub fn check_ai_result(&mut self) {
        let (result, elapsed) = match &mut self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
                ready,
            } => {
                if ready.is_none() {
                    match receiver.try_recv() {
                        Ok(result) => *ready = Some(result),
                        Err(TryRecvError::Empty) => return,
                        Err(TryRecvError::Disconnected) => {
                            warn!("search thread exited without a result");
                            self.ai_state = AiState::Idle;
                            self.message = Some("AI error".to_string());
                            return;
                        }
                    }
                }
                let elapsed = start_time.elapsed();
                if elapsed < self.ai_delay {
                    return;
                }
                match ready.take() {
                    Some(result) => (result, elapsed),
                    None => return,
                }
            }
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.last_ai_time = Some(elapsed);
        debug!(best = ?result.best_move, nodes = result.nodes, "committing computer move");

        match result.best_move {
            Some(pos) => {
                if let Err(e) = self.execute_move(pos) {
                    self.message = Some(e.to_string());
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
        self.last_ai_result = Some(result);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RoundStatus;

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.display.ai_delay_ms = 0;
        config
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(10);
        state.start_ai_thinking();
        while state.is_ai_thinking() {
            assert!(Instant::now() < deadline, "search did not finish");
            state.check_ai_result();
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_human_then_ai() {
        let mut state = GameState::new(&config()).unwrap();
        assert!(state.is_human_turn());
        state.try_place(Pos::new(1, 1)).unwrap();
        assert!(state.is_ai_turn());
        assert!(state.try_place(Pos::new(0, 0)).is_err());

        wait_for_ai(&mut state);
        assert_eq!(state.round.moves_played(), 2);
        assert_eq!(state.current_mark(), Mark::Y);
        let result = state.last_ai_result.as_ref().unwrap();
        assert_eq!(state.round.last_move(), result.best_move);
    }

    #[test]
    fn test_occupied_cell_message() {
        let mut state = GameState::new(&config()).unwrap();
        state.try_place(Pos::new(0, 0)).unwrap();
        wait_for_ai(&mut state);
        let err = state.try_place(Pos::new(0, 0)).unwrap_err();
        assert!(err.contains("already occupied"));
    }

    #[test]
    fn test_finished_round_grows_board() {
        let mut state = GameState::new(&config()).unwrap();
        // Y completes column 2 while the computer is kept off it by hand
        let moves = [(0, 0), (1, 0), (0, 2), (2, 1), (2, 0), (1, 2), (1, 1), (0, 1), (2, 2)];
        for (r, c) in moves {
            state.execute_move(Pos::new(r, c)).unwrap();
        }
        assert_eq!(state.round.status(), RoundStatus::Won(Mark::Y));
        assert!(state.try_place(Pos::new(0, 0)).is_err());
        assert_eq!(state.session.scoreboard().wins(Mark::Y), 1);

        state.next_round().unwrap();
        assert_eq!(state.round.board().size(), 4);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_next_round_waits_for_end() {
        let mut state = GameState::new(&config()).unwrap();
        state.try_place(Pos::new(0, 0)).unwrap();
        state.next_round().unwrap();
        assert_eq!(state.round.moves_played(), 1);
    }

    #[test]
    fn test_new_session_duel() {
        let mut state = GameState::new(&config()).unwrap();
        state.try_place(Pos::new(0, 0)).unwrap();
        state.new_session(PlayerCount::Two).unwrap();
        assert_eq!(state.order(), &TurnOrder::duel());
        assert_eq!(state.round.moves_played(), 0);
        assert_eq!(state.session.size(), 3);
    }
}
