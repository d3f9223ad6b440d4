//! Reference terminal host for the menu engine.
//!
//! Wires real collaborators (JSON config store, filesystem lister, JSON
//! preset store, keyboard binder) into the engine and drives it from a
//! ratatui event loop.

mod app;
mod binder;
mod listing;
mod options;
mod platform;
mod preset;
mod render;
mod store;
mod video;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command-line arguments for the frontend.
#[derive(Parser)]
#[command(name = "frontend-tui", about = "Terminal frontend for the menu engine")]
struct Cli {
    /// Directory the content browser starts in.
    #[arg(long, default_value = ".")]
    content_dir: String,

    /// Config file path. Defaults to ~/.frontend-tui/config.json.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed number of visible rows. Fills the terminal height when omitted.
    #[arg(long)]
    rows: Option<usize>,

    /// Directory for the rolling debug log.
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Log to a daily-rolling file; the terminal itself belongs to the menu.
    std::fs::create_dir_all(&cli.log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "frontend-tui");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("frontend starting up");

    println!("Menu frontend - starting...");
    println!("Debug logs: {}/frontend-tui.YYYY-MM-DD", cli.log_dir);

    let config_path = cli.config.unwrap_or_else(store::default_config_path);
    let config = store::JsonConfigStore::load_or_default(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    let state_dir = config_path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let options = options::FileCoreOptions::load_in(&state_dir)
        .with_context(|| format!("loading core options from {}", state_dir.display()))?;
    let presets = preset::JsonPresetStore::new(state_dir.join("current_preset.json"));

    let mut app = app::App::new(config, options, presets, cli.rows);
    app.run(&cli.content_dir)?;

    tracing::info!("frontend shutting down");
    Ok(())
}
