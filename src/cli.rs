//! Command-line interface for tictactrio.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use tictactrio::{AppConfig, PlayerCount};

/// Tic-Tac-Trio - three-player tic-tac-toe against a minimax AI
#[derive(Parser, Debug)]
#[command(name = "tictactrio")]
#[command(about = "Three-player tic-tac-toe on a growing board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board size of the first round (3 to 8)
    #[arg(short, long, global = true)]
    pub size: Option<usize>,

    /// Number of players at the table
    #[arg(short, long, global = true, value_enum)]
    pub players: Option<Players>,

    /// Front-end to run (defaults to the GUI)
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// Available front-ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Native window
    Gui,
    /// Line-based play in the terminal
    Console,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Players {
    Two,
    Three,
}

impl From<Players> for PlayerCount {
    fn from(players: Players) -> Self {
        match players {
            Players::Two => PlayerCount::Two,
            Players::Three => PlayerCount::Three,
        }
    }
}

impl Cli {
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or(Mode::Gui)
    }

    /// Apply command-line overrides on top of the file configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(size) = self.size {
            config.session.starting_size = size;
        }
        if let Some(players) = self.players {
            config.session.players = players.into();
        }
    }
}
