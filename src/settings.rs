//! Game tunables
//!
//! Loaded from a JSON file next to the binary; every field is optional and
//! falls back to the reference values in [`crate::consts`].

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{MazeLayout, PursuitStrategy, PursuitTimer, SessionRules};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Maze ===
    pub cols: usize,
    pub rows: usize,

    // === Session ===
    pub starting_lives: u8,
    pub maze_bonus: u64,
    pub mazes_per_session: u32,

    // === Enemy ===
    pub pursuit: PursuitStrategy,
    pub pursuit_interval_ms: u64,
    pub start_delay_ms: u64,

    /// Run seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cols: COLS,
            rows: ROWS,

            starting_lives: STARTING_LIVES,
            maze_bonus: MAZE_BONUS,
            mazes_per_session: MAZES_PER_SESSION,

            pursuit: PursuitStrategy::ShortestPath,
            pursuit_interval_ms: PURSUIT_INTERVAL_MS,
            start_delay_ms: START_DELAY_MS,

            seed: None,
        }
    }
}

impl Settings {
    /// Session rules derived from these settings
    pub fn rules(&self) -> SessionRules {
        SessionRules {
            starting_lives: self.starting_lives,
            maze_bonus: self.maze_bonus,
            mazes_per_session: self.mazes_per_session,
        }
    }

    /// Fresh pursuit pacing gate
    pub fn pursuit_timer(&self) -> PursuitTimer {
        PursuitTimer::new(self.pursuit_interval_ms, self.start_delay_ms)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.cols < 2 || self.rows < 2 {
            return Err(SettingsError::Invalid(format!(
                "maze must be at least 2x2, got {}x{}",
                self.cols, self.rows
            )));
        }
        let layout = MazeLayout::for_size(self.cols, self.rows);
        if layout.player == layout.exit || layout.player == layout.start {
            return Err(SettingsError::Invalid(format!(
                "a {}x{} maze puts the player spawn {} on the exit or enemy spawn",
                self.cols, self.rows, layout.player
            )));
        }
        if self.starting_lives == 0 {
            return Err(SettingsError::Invalid("starting_lives must be positive".into()));
        }
        if self.mazes_per_session == 0 {
            return Err(SettingsError::Invalid("mazes_per_session must be positive".into()));
        }
        if self.pursuit_interval_ms == 0 {
            return Err(SettingsError::Invalid("pursuit_interval_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let settings = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Like [`Settings::load`] but never fails
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Settings saved");
        Ok(())
    }
}
