//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in from the caller (never read from the wall clock here)
//! - Seeded RNG only
//! - Stable neighbor iteration order
//! - No rendering or platform dependencies

pub mod grid;
pub mod maze_gen;
pub mod movement;
pub mod pursuit;
pub mod session;
pub mod state;
pub mod tick;

pub use grid::{Cell, Direction, Grid, GridError, Pos};
pub use maze_gen::{MazeLayout, generate_maze, maze_seed};
pub use movement::{MoveOutcome, attempt_move};
pub use pursuit::{PursuitStrategy, PursuitTimer, greedy_step, shortest_path_step};
pub use session::{GamePhase, Session, SessionRules, Trigger, transition};
pub use state::{GameEvent, GameState, ScoreSubmission};
pub use tick::{TickInput, tick};
