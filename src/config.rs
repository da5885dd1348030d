//! Application configuration
//!
//! Everything is optional in the TOML file; missing keys fall back to the
//! defaults below.
//!
//! ```toml
//! [session]
//! starting_size = 4
//! players = "two"
//!
//! [search]
//! pruning = true
//!
//! [display]
//! ai_delay_ms = 0
//! styles.x = { glyph = "X", color = [230, 80, 80] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Mark, MAX_SIZE, MIN_SIZE};
use crate::engine::SearchConfig;
use crate::error::{Error, Result};
use crate::turn::{PlayerCount, TurnOrder};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub search: SearchConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Board size of the first round
    pub starting_size: usize,
    pub players: PlayerCount,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_size: MIN_SIZE,
            players: PlayerCount::Three,
        }
    }
}

impl SessionConfig {
    pub fn turn_order(&self) -> TurnOrder {
        TurnOrder::for_players(self.players)
    }
}

/// Presentation settings shared by the console and the GUI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub header: String,
    /// Pause before the computer's move is shown
    pub ai_delay_ms: u64,
    /// Clear the terminal before each board (console only)
    pub clear_screen: bool,
    pub styles: MarkStyles,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            header: "Tic-Tac-Trio".to_string(),
            ai_delay_ms: 400,
            clear_screen: false,
            styles: MarkStyles::default(),
        }
    }
}

/// Glyph and color of one mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkStyle {
    pub glyph: char,
    pub color: [u8; 3],
}

impl MarkStyle {
    pub const fn new(glyph: char, color: [u8; 3]) -> Self {
        Self { glyph, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkStyles {
    pub x: MarkStyle,
    pub o: MarkStyle,
    pub y: MarkStyle,
}

impl Default for MarkStyles {
    fn default() -> Self {
        Self {
            x: MarkStyle::new('X', [220, 80, 80]),
            o: MarkStyle::new('O', [80, 140, 230]),
            y: MarkStyle::new('Y', [90, 190, 110]),
        }
    }
}

impl MarkStyles {
    /// Style for a mark; `None` for an empty cell
    pub fn get(&self, mark: Mark) -> Option<&MarkStyle> {
        match mark {
            Mark::X => Some(&self.x),
            Mark::O => Some(&self.o),
            Mark::Y => Some(&self.y),
            Mark::Empty => None,
        }
    }
}

impl AppConfig {
    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse TOML text that did not come from a file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| Error::Config {
            path: "<inline>".into(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let size = self.session.starting_size;
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(Error::InvalidSize {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        if let Some(depth) = self.search.depth_override {
            if depth < 1 {
                return Err(Error::InvalidDepth { depth });
            }
        }
        Ok(())
    }
}
