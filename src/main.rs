// Slidedeck - Markdown slide presenter for the terminal
//
// Presents a deck of slides cut from one Markdown file, one slide at a
// time, with keyboard, mouse-button and swipe navigation.
//
// Architecture:
// - Deck: Markdown file split into slides and parsed into blocks
// - Controller: Navigation state, delayed activation, entrance animation
// - Input: Keyboard, swipe and button adapters driving the controller
// - TUI (ratatui): Renders the current slide and navigation chrome
// - Logging: tracing captured into an in-app buffer, optional JSON files

mod cli;
mod config;
mod controller;
mod deck;
mod input;
mod logging;
mod theme;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::{Config, LogRotation};
use controller::{LogListener, SlideController};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing
///
/// Logs never go to stdout while the alternate screen is up: they are
/// captured into the buffer shown by the logs panel, and optionally
/// written as JSON to rotating files. The returned guard must live until
/// exit so buffered file logs are flushed.
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("slidedeck={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    if !config.logging.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.logging.file_dir, e
        );
        // Fall back to buffer-only logging
        tracing_subscriber::registry()
            .with(filter)
            .with(TuiLogLayer::new(log_buffer.clone()))
            .init();
        return None;
    }

    let file_appender = match config.logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.logging.file_dir, &config.logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&config.logging.file_dir, &config.logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&config.logging.file_dir, &config.logging.file_prefix)
        }
    };

    // Writes happen in a background thread
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Subcommands (outline, config ...) run and exit
    if cli::handle_command(cli.command.take())? {
        return Ok(());
    }

    let Some(deck_path) = cli.deck.clone() else {
        eprintln!("Usage: slidedeck [OPTIONS] <DECK>");
        eprintln!("Try `slidedeck --help` for more information.");
        std::process::exit(2);
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    let log_buffer = LogBuffer::new();
    let _file_guard = init_tracing(&config, &log_buffer);

    let deck = config
        .load_deck(&deck_path)
        .with_context(|| format!("Failed to load deck {}", deck_path.display()))?;

    let mut controller = SlideController::new(&deck, config.controller_options())
        .context("Failed to initialize slide controller")?;
    controller.add_listener(LogListener);

    if let Some(n) = cli.start {
        if !controller.go_to(n) && n != controller.current_slide() {
            tracing::warn!("Start slide {} is out of range (1-{})", n, deck.len());
        }
    }

    tracing::info!(
        "Presenting \"{}\" ({} slides, theme {}, reduced motion {})",
        deck.title(),
        deck.len(),
        config.theme,
        config.animation.reduced_motion
    );

    let app = tui::app::App::new(deck, controller, &config, log_buffer);
    tui::run_tui(app, &config).await
}
