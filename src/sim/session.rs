//! Session bookkeeping and the game-phase state machine
//!
//! `Session` is a plain value; [`transition`] takes one and returns the next
//! one together with the phase the game moves into.

use serde::{Deserialize, Serialize};

use crate::consts::{MAZE_BONUS, MAZES_PER_SESSION, STARTING_LIVES};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Exit reached; a new maze follows immediately
    MazeCleared,
    /// Caught by the enemy with lives to spare; a new maze follows immediately
    PlayerCaptured,
    /// Session ended, final score handed to the leaderboard
    SessionOver,
}

impl GamePhase {
    /// Phases that are resolved within the same tick they are entered
    pub fn is_transient(self) -> bool {
        matches!(self, GamePhase::MazeCleared | GamePhase::PlayerCaptured)
    }
}

/// What happened to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    ReachedExit,
    Captured,
}

/// Session limits and rewards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRules {
    pub starting_lives: u8,
    pub maze_bonus: u64,
    pub mazes_per_session: u32,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            maze_bonus: MAZE_BONUS,
            mazes_per_session: MAZES_PER_SESSION,
        }
    }
}

/// Counters that persist across mazes within one play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub lives: u8,
    pub score: u64,
    pub mazes_completed: u32,
}

impl Session {
    pub fn new(rules: &SessionRules) -> Self {
        Self {
            lives: rules.starting_lives,
            score: 0,
            mazes_completed: 0,
        }
    }
}

/// Apply a trigger to a session in the `Playing` phase.
///
/// | trigger | guard | next |
/// |---|---|---|
/// | exit | completed+1 < threshold | `MazeCleared` |
/// | exit | completed+1 >= threshold | `SessionOver` |
/// | capture | lives-1 > 0 | `PlayerCaptured` |
/// | capture | lives-1 == 0 | `SessionOver` |
pub fn transition(session: Session, trigger: Trigger, rules: &SessionRules) -> (Session, GamePhase) {
    match trigger {
        Trigger::ReachedExit => {
            let next = Session {
                score: session.score + rules.maze_bonus,
                mazes_completed: session.mazes_completed + 1,
                ..session
            };
            let phase = if next.mazes_completed >= rules.mazes_per_session {
                GamePhase::SessionOver
            } else {
                GamePhase::MazeCleared
            };
            (next, phase)
        }
        Trigger::Captured => {
            let next = Session {
                lives: session.lives.saturating_sub(1),
                mazes_completed: session.mazes_completed + 1,
                ..session
            };
            let phase = if next.lives == 0 {
                GamePhase::SessionOver
            } else {
                GamePhase::PlayerCaptured
            };
            (next, phase)
        }
    }
}
