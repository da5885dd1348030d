//! Terminal rendering

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{style, Color, Stylize};
use crossterm::terminal::{Clear, ClearType};

use crate::board::{Board, Mark, Pos};
use crate::config::{DisplayConfig, MarkStyle};
use crate::error::{Error, Result};
use crate::rules::RoundStatus;
use crate::turn::TurnOrder;

/// Everything the console loop shows to the players
pub trait Renderer {
    fn header(&mut self, order: &TurnOrder) -> Result<()>;
    fn round_start(&mut self, round: u32, size: usize) -> Result<()>;
    fn board(&mut self, board: &Board, last_move: Option<Pos>) -> Result<()>;
    /// Prompt a human for a move
    fn turn(&mut self, mark: Mark) -> Result<()>;
    fn ai_thinking(&mut self, mark: Mark) -> Result<()>;
    fn ai_move(&mut self, mark: Mark, pos: Pos) -> Result<()>;
    fn rejected(&mut self, error: &Error) -> Result<()>;
    fn outcome(&mut self, status: RoundStatus, order: &TurnOrder) -> Result<()>;
    fn max_size_reached(&mut self) -> Result<()>;
    fn play_again(&mut self) -> Result<()>;
    fn farewell(&mut self) -> Result<()>;
}

/// [`Renderer`] writing to any terminal-like stream
pub struct ConsoleRenderer<W: Write> {
    out: W,
    display: DisplayConfig,
    color: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, display: DisplayConfig) -> Self {
        Self {
            out,
            display,
            color: true,
        }
    }

    /// Turn ANSI styling and screen clearing on or off
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn mark_style(&self, mark: Mark) -> Option<MarkStyle> {
        self.display.styles.get(mark).copied()
    }

    fn write_mark(&mut self, mark: Mark, emphasized: bool) -> Result<()> {
        let Some(st) = self.mark_style(mark) else {
            write!(self.out, " ")?;
            return Ok(());
        };
        if !self.color {
            write!(self.out, "{}", st.glyph)?;
            return Ok(());
        }
        let [r, g, b] = st.color;
        let styled = style(st.glyph).with(Color::Rgb { r, g, b }).bold();
        if emphasized {
            write!(self.out, "{}", styled.underlined())?;
        } else {
            write!(self.out, "{styled}")?;
        }
        Ok(())
    }

    fn player_name(&self, mark: Mark, order: &TurnOrder) -> String {
        let glyph = self.mark_style(mark).map_or('?', |s| s.glyph);
        if order.is_automated(mark) {
            format!("The computer ({glyph})")
        } else {
            format!("Player {glyph}")
        }
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn header(&mut self, order: &TurnOrder) -> Result<()> {
        writeln!(self.out, "\n=== {} ===", self.display.header)?;
        let humans: Vec<String> = order
            .humans()
            .filter_map(|m| self.mark_style(m).map(|s| s.glyph.to_string()))
            .collect();
        let computer = self.mark_style(order.automated()).map_or('?', |s| s.glyph);
        writeln!(
            self.out,
            "Humans play {}, the computer plays {computer}",
            humans.join(" and ")
        )?;
        writeln!(self.out, "Type moves as row,column (for example 1,1)")?;
        self.out.flush()?;
        Ok(())
    }

    fn round_start(&mut self, round: u32, size: usize) -> Result<()> {
        writeln!(self.out, "\nRound {round}: {size}x{size} board")?;
        Ok(())
    }

    fn board(&mut self, board: &Board, last_move: Option<Pos>) -> Result<()> {
        if self.color && self.display.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        let n = board.size();
        let separator = format!("    +{}", "---+".repeat(n));

        write!(self.out, "\n    ")?;
        for c in 0..n {
            write!(self.out, "  {c} ")?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{separator}")?;

        for r in 0..n {
            write!(self.out, "  {r} |")?;
            for c in 0..n {
                let pos = Pos::new(r as u8, c as u8);
                write!(self.out, " ")?;
                self.write_mark(board.get(pos), last_move == Some(pos))?;
                write!(self.out, " |")?;
            }
            writeln!(self.out)?;
            writeln!(self.out, "{separator}")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn turn(&mut self, mark: Mark) -> Result<()> {
        let glyph = self.mark_style(mark).map_or('?', |s| s.glyph);
        write!(self.out, "\nPlayer {glyph}, your move (row,column): ")?;
        self.out.flush()?;
        Ok(())
    }

    fn ai_thinking(&mut self, mark: Mark) -> Result<()> {
        let glyph = self.mark_style(mark).map_or('?', |s| s.glyph);
        writeln!(self.out, "\nThe computer ({glyph}) is thinking...")?;
        self.out.flush()?;
        Ok(())
    }

    fn ai_move(&mut self, mark: Mark, pos: Pos) -> Result<()> {
        let glyph = self.mark_style(mark).map_or('?', |s| s.glyph);
        writeln!(self.out, "The computer places {glyph} at {pos}")?;
        Ok(())
    }

    fn rejected(&mut self, error: &Error) -> Result<()> {
        let message = match error {
            Error::OutOfBounds { .. } | Error::CellOccupied { .. } => {
                format!("You can't go there: {error}. Try again.")
            }
            _ => format!("{error}."),
        };
        if self.color {
            writeln!(self.out, "{}", message.as_str().yellow())?;
        } else {
            writeln!(self.out, "{message}")?;
        }
        Ok(())
    }

    fn outcome(&mut self, status: RoundStatus, order: &TurnOrder) -> Result<()> {
        match status {
            RoundStatus::Won(mark) => {
                let name = self.player_name(mark, order);
                writeln!(self.out, "\n{name} wins the round!")?;
            }
            RoundStatus::Draw => writeln!(self.out, "\nIt's a tie!")?,
            RoundStatus::InProgress => {}
        }
        Ok(())
    }

    fn max_size_reached(&mut self) -> Result<()> {
        writeln!(self.out, "The board has reached its maximum size of 8x8.")?;
        Ok(())
    }

    fn play_again(&mut self) -> Result<()> {
        write!(self.out, "\nPlay another round? (y/n): ")?;
        self.out.flush()?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.out, "\nThanks for playing!")?;
        self.out.flush()?;
        Ok(())
    }
}
