//! GUI front-end
//!
//! A native egui/eframe window over the same session model the console uses.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::TrioApp;
pub use game_state::{AiState, GameState};
