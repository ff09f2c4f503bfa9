//! Perfect-maze generation
//!
//! Randomized depth-first carving with an explicit stack (recursive
//! backtracker). Every cell ends up connected to every other by exactly one
//! path, so the open-wall graph is a spanning tree.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Direction, Grid, Pos};
use crate::consts::PLAYER_START_COL;

/// Marker placement for a freshly generated maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeLayout {
    /// Carving start; the enemy spawns here
    pub start: Pos,
    /// Player spawn near the bottom-left corner
    pub player: Pos,
    /// Exit in the corner opposite the carving start
    pub exit: Pos,
}

impl MazeLayout {
    /// Standard layout for a `cols` x `rows` maze
    pub fn for_size(cols: usize, rows: usize) -> Self {
        let last_col = cols.saturating_sub(1);
        let last_row = rows.saturating_sub(1);
        Self {
            start: Pos::new(0, 0),
            player: Pos::new(PLAYER_START_COL.min(last_col), last_row),
            exit: Pos::new(last_col, last_row),
        }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::for_size(grid.cols(), grid.rows())
    }
}

/// Derive the seed for maze `index` of a run
pub fn maze_seed(run_seed: u64, index: u32) -> u64 {
    // Knuth multiplicative hash so consecutive mazes diverge
    (index as u64)
        .wrapping_mul(2654435761)
        .wrapping_add(run_seed)
}

/// Carve a perfect maze starting from `start`.
///
/// On return all `visited` flags are cleared again so the grid can be
/// inspected without generation residue.
pub fn generate_maze<R: Rng>(cols: usize, rows: usize, start: Pos, rng: &mut R) -> Grid {
    let mut grid = Grid::new(cols, rows);
    if grid.is_empty() {
        return grid;
    }

    let mut stack: Vec<Pos> = Vec::with_capacity(grid.len());
    let mut current = start;
    let mut candidates: Vec<(Direction, Pos)> = Vec::with_capacity(4);

    loop {
        grid[current].visited = true;

        candidates.clear();
        for dir in Direction::ALL {
            if let Some(next) = grid.neighbor(current, dir) {
                if !grid[next].visited {
                    candidates.push((dir, next));
                }
            }
        }

        if candidates.is_empty() {
            match stack.pop() {
                Some(prev) => current = prev,
                None => break,
            }
        } else {
            let (dir, next) = candidates[rng.random_range(0..candidates.len())];
            grid.open(current, dir, next);
            stack.push(current);
            current = next;
        }
    }

    grid.reset_visited();
    log::debug!(
        "Carved {}x{} maze from {} ({} passages)",
        cols,
        rows,
        start,
        grid.open_wall_pairs()
    );
    grid
}
