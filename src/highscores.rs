//! Best-score persistence collaborator
//!
//! The core only compares against the stored best and emits
//! `HighScoreUpdated`; ownership of the storage lives with the host, behind
//! [`HighScoreStore`]. Reads/writes happen at game-over time, never per tick.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// External key-value collaborator holding the best score across games
pub trait HighScoreStore {
    fn get(&self) -> u32;
    fn set(&mut self, score: u32);
}

/// In-memory store for tests and headless demos
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryStore {
    fn get(&self) -> u32 {
        self.best
    }

    fn set(&mut self, score: u32) {
        self.best = score;
    }
}

/// On-disk JSON payload
#[derive(Debug, Serialize, Deserialize)]
struct SavedScore {
    best: u32,
}

/// JSON-file backed store for the native host
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for JsonFileStore {
    fn get(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<SavedScore>(&json) {
                Ok(saved) => {
                    log::info!("loaded high score {} from {}", saved.best, self.path.display());
                    saved.best
                }
                Err(err) => {
                    log::warn!(
                        "ignoring corrupt high score file {}: {err}",
                        self.path.display()
                    );
                    0
                }
            },
            Err(_) => {
                log::info!("no high score file at {}, starting fresh", self.path.display());
                0
            }
        }
    }

    fn set(&mut self, score: u32) {
        match serde_json::to_string(&SavedScore { best: score }) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::error!("failed to save high score to {}: {err}", self.path.display());
                } else {
                    log::info!("high score {score} saved");
                }
            }
            Err(err) => log::error!("failed to serialize high score: {err}"),
        }
    }
}
