//! Runtime configuration from environment variables.
//!
//! Every field has a default; a malformed value falls back to it.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{TICK_MS, TICK_UNITS};

pub const DEFAULT_HIGH_SCORES_PATH: &str = "high_scores.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// High-score file (`TETRIS_HIGH_SCORES_PATH`)
    pub high_scores_path: PathBuf,
    /// JSON-lines event log (`TETRIS_LOG_PATH`); disabled when unset
    pub log_path: Option<PathBuf>,
    /// Piece RNG seed (`TETRIS_SEED`)
    pub seed: u32,
    /// Real-time frame length in milliseconds (`TETRIS_TICK_MS`)
    pub tick_ms: u32,
    /// Engine time units credited per frame (`TETRIS_TICK_UNITS`)
    pub tick_units: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            high_scores_path: PathBuf::from(DEFAULT_HIGH_SCORES_PATH),
            log_path: None,
            seed: clock_seed(),
            tick_ms: TICK_MS,
            tick_units: TICK_UNITS,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (tests pass a map here)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let positive = |key: &str| {
            text(key)
                .and_then(|s| s.parse::<u32>().ok())
                .filter(|&v| v > 0)
        };

        Self {
            high_scores_path: text("TETRIS_HIGH_SCORES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.high_scores_path),
            log_path: text("TETRIS_LOG_PATH").map(PathBuf::from),
            seed: text("TETRIS_SEED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed),
            tick_ms: positive("TETRIS_TICK_MS").unwrap_or(defaults.tick_ms),
            tick_units: positive("TETRIS_TICK_UNITS").unwrap_or(defaults.tick_units),
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
