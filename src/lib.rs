//! Acorn Maze - a maze-chase game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, maze carving, movement, pursuit, session)
//! - `settings`: Data-driven game tunables
//! - `leaderboard`: Ranking of persisted scores
//! - `persistence`: Score store collaborator interface
//! - `platform`: Clock and touch-input helpers for the host

pub mod leaderboard;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use leaderboard::Leaderboard;
pub use settings::{Settings, SettingsError};

/// Game configuration constants (reference instance)
pub mod consts {
    /// Maze dimensions in cells
    pub const COLS: usize = 15;
    pub const ROWS: usize = 15;

    /// Lives at the start of a session
    pub const STARTING_LIVES: u8 = 3;
    /// Score awarded per cleared maze
    pub const MAZE_BONUS: u64 = 1000;
    /// Mazes a session lasts before the leaderboard handoff
    pub const MAZES_PER_SESSION: u32 = 3;

    /// Delay between enemy steps (ms)
    pub const PURSUIT_INTERVAL_MS: u64 = 400;
    /// Delay before the enemy starts moving at all (ms)
    pub const START_DELAY_MS: u64 = 0;

    /// Player spawn column (row is always the bottom row)
    pub const PLAYER_START_COL: usize = 1;

    /// Persistence collection the final scores go into
    pub const LEADERBOARD_COLLECTION: &str = "leaderboard";
}
