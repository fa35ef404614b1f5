//! Terminal game runner (default binary).
//!
//! Owns the single `Session`, reads keys with crossterm, ticks the session once
//! per frame with the elapsed milliseconds since start, and renders through the
//! framebuffer-based terminal view.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;

use blockfall::config::Cli;
use blockfall::core::{PieceSource, Session, Snapshot, TickOutcome};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.resolve_seed();
    info!(seed, bag = cli.bag, validate_rotation = cli.validate_rotation, "starting blockfall");
    let mut session = Session::with_config(cli.piece_source(seed), cli.session_config());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = session.score(), lines = session.lines(), level = session.level(), "exiting");
    result
}

/// Install a file-backed subscriber when `--log-file` is given; otherwise
/// logging stays off because stdout belongs to the game screen.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(cli.log_level()))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session<Box<dyn PieceSource>>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = Snapshot::default();

    let start = Instant::now();
    let mut last_frame = Instant::now();
    let frame = Duration::from_millis(FRAME_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        let changed = session.apply(command);
                        debug!(command = command.as_str(), changed, "command");
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Frame clock.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            let now_ms = start.elapsed().as_secs_f64() * 1000.0;
            if session.tick(now_ms) == TickOutcome::GameOver {
                info!(score = session.score(), "game over, press r to restart");
            }
        }
    }
}
