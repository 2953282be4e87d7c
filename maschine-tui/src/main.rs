mod api;
mod app;
mod cli;
mod config;
mod navigation;
mod runtime;
mod search;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { api_url: None }) {
        Commands::ConfigPath => {
            let path = config::MaschineConfig::config_path()?;
            if !path.exists() {
                config::MaschineConfig::default().save()?;
            }
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run { api_url } => {
            let mut cfg = config::MaschineConfig::load()?;
            if let Some(api_url) = api_url {
                cfg.api_url = api_url;
            }
            init_logging()?;
            run(cfg).await
        }
    }
}

/// Stdout belongs to the terminal UI, so logs go to a file in the cache dir.
fn init_logging() -> Result<()> {
    let path = config::MaschineConfig::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MASCHINE_TUI_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

async fn run(cfg: config::MaschineConfig) -> Result<()> {
    let client = api::ApiClient::new(&cfg.api_url)?;
    tracing::info!(api_url = %cfg.api_url, "Starting maschine-tui");

    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, client, &cfg).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("maschine-tui exited with error: {:#}", err);
    }
    res
}
