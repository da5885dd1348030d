//! Console front-end
//!
//! Line-based play in a terminal: the board is redrawn after every move,
//! humans type `row,col`, and the computer answers through [`AIEngine`].

pub mod input;
pub mod render;

use std::io::{self, BufRead, StdinLock, Stdout};
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::engine::AIEngine;
use crate::error::{Error, Result};
use crate::rules::RoundStatus;
use crate::session::{Round, Session};

pub use input::{is_yes, parse_move};
pub use render::{ConsoleRenderer, Renderer};

/// Session loop over a line reader and a renderer
pub struct Console<R: BufRead, V: Renderer> {
    input: R,
    renderer: V,
    session: Session,
    engine: AIEngine,
    ai_delay: Duration,
}

impl Console<StdinLock<'static>, ConsoleRenderer<Stdout>> {
    /// Console on the process's stdin and stdout
    pub fn stdio(config: &AppConfig) -> Result<Self> {
        let renderer = ConsoleRenderer::new(io::stdout(), config.display.clone());
        Self::new(io::stdin().lock(), renderer, config)
    }
}

impl<R: BufRead, V: Renderer> Console<R, V> {
    pub fn new(input: R, renderer: V, config: &AppConfig) -> Result<Self> {
        let order = config.session.turn_order();
        Ok(Self {
            input,
            renderer,
            session: Session::new(config.session.starting_size, order)?,
            engine: AIEngine::with_config(order, config.search),
            ai_delay: Duration::from_millis(config.display.ai_delay_ms),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    /// Play rounds until the players decline another one or input ends.
    pub fn run(&mut self) -> Result<()> {
        let order = *self.session.order();
        self.renderer.header(&order)?;

        loop {
            let mut round = self.session.start_round()?;
            self.renderer
                .round_start(self.session.round_number(), round.board().size())?;

            let Some(status) = self.play_round(&mut round)? else {
                info!("input closed mid-round");
                break;
            };
            self.renderer.outcome(status, &order)?;

            self.session.finish_round(&round);
            if self.session.at_max_size() {
                self.renderer.max_size_reached()?;
            }

            self.renderer.play_again()?;
            match self.read_line()? {
                Some(answer) if is_yes(&answer) => continue,
                _ => break,
            }
        }

        self.renderer.farewell()?;
        Ok(())
    }

    /// Play one round to the end; `None` when input runs out first.
    fn play_round(&mut self, round: &mut Round) -> Result<Option<RoundStatus>> {
        while !round.is_over() {
            self.renderer.board(round.board(), round.last_move())?;
            let mark = round.current_mark();

            if round.is_automated_turn() {
                self.renderer.ai_thinking(mark)?;
                let pos = self.engine.select_move(round.board())?;
                if !self.ai_delay.is_zero() {
                    thread::sleep(self.ai_delay);
                }
                round.play_at(pos)?;
                self.renderer.ai_move(mark, pos)?;
                continue;
            }

            loop {
                self.renderer.turn(mark)?;
                let Some(line) = self.read_line()? else {
                    return Ok(None);
                };
                match parse_move(&line).and_then(|(row, col)| round.play(row, col)) {
                    Ok(_) => break,
                    Err(e) => {
                        debug!(%mark, input = %line, error = %e, "move rejected");
                        self.renderer.rejected(&e)?;
                    }
                }
            }
        }

        self.renderer.board(round.board(), round.last_move())?;
        Ok(Some(round.status()))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read player input".to_string(),
                source,
            })?;
        Ok((read > 0).then(|| line.trim().to_string()))
    }
}
