//! Tic-Tac-Trio
//!
//! Play in a native window (default) or in the terminal.

mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Mode};
use tictactrio::console::Console;
use tictactrio::ui::{GameState, TrioApp};
use tictactrio::AppConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::default(),
    };
    cli.apply(&mut config);
    config.validate().context("invalid settings")?;

    info!(mode = ?cli.mode(), size = config.session.starting_size, "starting");

    match cli.mode() {
        Mode::Console => run_console(&config),
        Mode::Gui => run_gui(config),
    }
}

fn run_console(config: &AppConfig) -> Result<()> {
    Console::stdio(config)?.run()?;
    Ok(())
}

fn run_gui(config: AppConfig) -> Result<()> {
    let state = GameState::new(&config)?;
    let display = config.display.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title(config.display.header.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Trio",
        options,
        Box::new(move |_cc| Ok(Box::new(TrioApp::new(state, display)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
