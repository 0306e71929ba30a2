//! Secret Arcade runner (default binary).
//!
//! Crossterm input, the framebuffer renderer from `secret_arcade::term` and a
//! fixed-step frame loop.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use secret_arcade::app::{App, Screen};
use secret_arcade::config::{ArcadeConfig, ConfigOverrides};
use secret_arcade::term::{FrameBuffer, TerminalRenderer, Viewport};

/// The portfolio's hidden mini-games in your terminal.
#[derive(Debug, Parser)]
#[command(
    name = "secret-arcade",
    version,
    about = "Hidden mini-games in the terminal: type the Konami code for Tetris, click the top-left corner five times for a drawing canvas."
)]
struct Args {
    /// Piece RNG seed (defaults to ARCADE_SEED, then the clock).
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Frame step in milliseconds, 1..=1000 (defaults to ARCADE_TICK_MS, then 16).
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u32>,

    /// Skip the landing screen and open a game directly.
    #[arg(long, value_enum)]
    open: Option<Screen>,

    /// Append logs to this file (defaults to ARCADE_LOG_PATH; no logging otherwise).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ArcadeConfig::from_env_with(ConfigOverrides {
        seed: args.seed,
        tick_ms: args.tick_ms,
        log_path: args.log_file,
        open: args.open,
    })?;

    init_tracing(config.log_path.as_deref())?;

    let seed = config.resolved_seed();
    info!(seed, tick_ms = config.tick_ms, open = ?config.open, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    info!("exited");
    result
}

fn run(term: &mut TerminalRenderer, config: &ArcadeConfig, seed: u32) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(seed, Viewport::new(w, h));
    app.open(config.open);

    let mut fb = FrameBuffer::new(w, h);
    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        app.render_into(&mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(w, h) => {
                    app.resize(Viewport::new(w, h));
                    term.invalidate();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(config.tick_ms);
        }
    }

    Ok(())
}

/// Logs go to a file only; writing to stdout/stderr would corrupt the TUI.
fn init_tracing(log_path: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(path) = log_path else {
        tracing_subscriber::registry().with(env_filter).init();
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();

    info!(path = %path.display(), "logging initialized");
    Ok(())
}
