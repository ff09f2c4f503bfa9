//! Player movement against wall state

use super::grid::{Direction, Grid, Pos};

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Moved into the neighboring cell
    Moved(Pos),
    /// A wall stands on that side; position unchanged
    Blocked,
}

impl MoveOutcome {
    pub fn moved(self) -> Option<Pos> {
        match self {
            MoveOutcome::Moved(pos) => Some(pos),
            MoveOutcome::Blocked => None,
        }
    }
}

/// Try to step from `from` in `dir`. Blocked moves are normal play, not errors.
pub fn attempt_move(grid: &Grid, from: Pos, dir: Direction) -> MoveOutcome {
    if grid.has_wall(from, dir) {
        return MoveOutcome::Blocked;
    }
    // Boundary walls are never carved, so an open side always has a neighbor
    match grid.neighbor(from, dir) {
        Some(next) => MoveOutcome::Moved(next),
        None => MoveOutcome::Blocked,
    }
}
