//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` key
//! events. It maps keys into [`KeyAction`]s (engine commands plus the
//! driver-level pause toggle) and buffers a frame's worth of them in an
//! [`InputQueue`].

pub mod map;
pub mod queue;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, KeyAction};
pub use queue::{InputQueue, QUEUE_CAPACITY};
