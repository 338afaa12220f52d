//! High-score persistence.
//!
//! The engine only reports scores; keeping the best one across sessions is
//! the driver's job. A store holds a single integer. [`HighScore`] loads it
//! once and writes back only when a reported score beats it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

/// Persistence for a single best score.
pub trait HighScoreStore {
    fn load(&mut self) -> Result<u32>;
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Stores the score as decimal text in a file.
///
/// A missing file reads as 0. So does a file that does not parse, after a
/// warning; the next new best overwrites it.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&mut self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read high score from {}", self.path.display()))
            }
        };
        Ok(text.trim().parse().unwrap_or_else(|_| {
            warn!(
                "ignoring unreadable high score {:?} in {}",
                text.trim(),
                self.path.display()
            );
            0
        }))
    }

    fn save(&mut self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("write high score to {}", self.path.display()))
    }
}

/// Keeps the value in memory; counts saves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryHighScoreStore {
    pub value: u32,
    pub saves: u32,
}

impl HighScoreStore for InMemoryHighScoreStore {
    fn load(&mut self) -> Result<u32> {
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.value = score;
        self.saves += 1;
        Ok(())
    }
}

/// Session view of the best score.
#[derive(Debug)]
pub struct HighScore<S> {
    best: u32,
    store: S,
}

impl<S: HighScoreStore> HighScore<S> {
    /// Load the stored best once, at session start.
    pub fn load(mut store: S) -> Result<Self> {
        let best = store.load()?;
        Ok(Self { best, store })
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Report a score. Persists and returns true if it beats the best.
    pub fn observe(&mut self, score: u32) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        self.best = score;
        self.store.save(score)?;
        info!("new high score {}", score);
        Ok(true)
    }
}
