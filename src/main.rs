//! Gomoku GUI
//!
//! A graphical interface for two players sharing one board.

mod cli;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use gomoku::config::AppConfig;
use gomoku::ui::GomokuApp;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    cli.apply(&mut config.game);
    config.game.validate()?;

    info!(
        board_size = config.game.board_size,
        win_count = config.game.win_count,
        "starting Gomoku"
    );
    run_window(config)
}

fn run_window(config: AppConfig) -> Result<()> {
    let window = &config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height])
            .with_title(window.title.clone()),
        ..Default::default()
    };
    let app_name = window.title.clone();

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            let app = GomokuApp::new(cc, config)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))?;

    info!("Gomoku exited");
    Ok(())
}
