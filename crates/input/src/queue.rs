//! Per-frame input buffer.
//!
//! The driver polls the terminal once per frame, pushes every pending event
//! into the queue, then drains the collected actions in arrival order. The
//! buffer is a fixed-capacity `ArrayVec`, so a frame never allocates.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit, KeyAction};

/// Maximum actions buffered per frame; extra key presses are dropped.
pub const QUEUE_CAPACITY: usize = 32;

#[derive(Debug, Default)]
pub struct InputQueue {
    pending: ArrayVec<KeyAction, QUEUE_CAPACITY>,
    quit: bool,
    resized: bool,
    dropped: u32,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key event.
    ///
    /// Presses and terminal auto-repeats are mapped; releases are ignored.
    pub fn push_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if should_quit(key) {
            self.quit = true;
            return;
        }
        if let Some(action) = handle_key_event(key) {
            if self.pending.try_push(action).is_err() {
                self.dropped = self.dropped.wrapping_add(1);
            }
        }
    }

    /// Record any terminal event.
    pub fn push_event(&mut self, ev: Event) {
        match ev {
            Event::Key(key) => self.push_key(key),
            Event::Resize(_, _) => self.resized = true,
            _ => {}
        }
    }

    /// Wait up to `timeout` for input, then collect everything already queued.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        loop {
            self.push_event(event::read()?);
            if !event::poll(Duration::ZERO)? {
                return Ok(());
            }
        }
    }

    /// Take the buffered actions, oldest first.
    pub fn drain(&mut self) -> ArrayVec<KeyAction, QUEUE_CAPACITY> {
        std::mem::take(&mut self.pending)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Report and reset the resize flag.
    pub fn take_resized(&mut self) -> bool {
        std::mem::replace(&mut self.resized, false)
    }

    /// Number of key presses dropped because a frame's buffer was full
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
