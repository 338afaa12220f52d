//! Terminal runner (default binary).
//!
//! Input, gravity and rendering share one thread: each frame drains the key
//! queue into the driver, lets the elapsed time pass on the gravity clock and
//! redraws the diff.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use log::info;

use blockfall::config::{init_logging, Args};
use blockfall::core::{Engine, PieceFactory, Snapshot};
use blockfall::driver::Driver;
use blockfall::highscore::{FileHighScoreStore, HighScore};
use blockfall::input::InputQueue;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let high_score = HighScore::load(FileHighScoreStore::new(&args.high_score_file))?;
    let factory = match args.seed {
        Some(seed) => PieceFactory::seeded(seed),
        None => PieceFactory::from_entropy(),
    };
    let mut driver = Driver::new(Engine::new(factory), high_score, args.tick_interval());
    info!(
        "session start: tick {}ms, seed {:?}, high score {}",
        args.tick_ms,
        args.seed,
        driver.high_score()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut driver);

    // Always try to restore terminal state.
    let _ = term.exit();

    let snap = driver.snapshot();
    info!(
        "session end: score {}, lines {}, pieces {}",
        snap.score, snap.lines, snap.pieces_locked
    );
    result
}

fn run(term: &mut TerminalRenderer, driver: &mut Driver<FileHighScoreStore>) -> Result<()> {
    let view = GameView::default();
    let mut input = InputQueue::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = Snapshot::default();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        driver.snapshot_into(&mut snap);
        view.render_into(&snap, &driver.hud(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        input.poll(frame.saturating_sub(last.elapsed()))?;
        if input.quit_requested() {
            return Ok(());
        }
        if input.take_resized() {
            term.invalidate();
        }
        for action in input.drain() {
            driver.handle(action);
        }

        let now = Instant::now();
        driver.advance(now - last);
        last = now;
    }
}
