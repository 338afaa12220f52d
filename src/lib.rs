//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,input,term,types}` and
//! adds what sits between them: the per-frame [`driver::Driver`], the
//! high-score store and the binary's configuration.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod driver;
pub mod highscore;
