//! Enemy pursuit AI
//!
//! Two strategies, one selected per game:
//! - `ShortestPath`: breadth-first search over open passages, recomputed from
//!   scratch on every step so a regenerated maze is never walked with a stale path
//! - `Greedy`: ignores walls and closes the larger axis gap first
//!
//! Pacing is handled by [`PursuitTimer`], driven by caller-supplied timestamps.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::{Grid, Pos};

/// Enemy movement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PursuitStrategy {
    #[default]
    ShortestPath,
    Greedy,
}

impl PursuitStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PursuitStrategy::ShortestPath => "shortest_path",
            PursuitStrategy::Greedy => "greedy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shortest_path" | "shortest-path" | "bfs" => Some(PursuitStrategy::ShortestPath),
            "greedy" => Some(PursuitStrategy::Greedy),
            _ => None,
        }
    }

    /// Next enemy cell, or `None` when the enemy should stay put
    pub fn next_step(&self, grid: &Grid, from: Pos, target: Pos) -> Option<Pos> {
        match self {
            PursuitStrategy::ShortestPath => shortest_path_step(grid, from, target),
            PursuitStrategy::Greedy => greedy_step(grid, from, target),
        }
    }
}

#[inline]
fn slot(grid: &Grid, pos: Pos) -> usize {
    pos.row * grid.cols() + pos.col
}

/// First cell on a shortest open-passage path from `from` to `target`.
///
/// Returns `None` when already on the target or when the target cannot be
/// reached (never the case in a perfect maze).
pub fn shortest_path_step(grid: &Grid, from: Pos, target: Pos) -> Option<Pos> {
    if from == target || !grid.contains(from) || !grid.contains(target) {
        return None;
    }

    let mut dist: Vec<Option<u32>> = vec![None; grid.len()];
    let mut queue = VecDeque::new();
    dist[slot(grid, from)] = Some(0);
    queue.push_back(from);

    let mut found = false;
    while let Some(current) = queue.pop_front() {
        if current == target {
            found = true;
            break;
        }
        let next_dist = dist[slot(grid, current)]? + 1;
        for next in grid.open_neighbors(current) {
            let entry = &mut dist[slot(grid, next)];
            if entry.is_none() {
                *entry = Some(next_dist);
                queue.push_back(next);
            }
        }
    }

    if !found {
        log::debug!("Pursuit target {} unreachable from {}", target, from);
        return None;
    }

    // Walk back from the target along strictly decreasing distances
    let mut current = target;
    let mut d = dist[slot(grid, target)]?;
    while d > 1 {
        current = grid
            .open_neighbors(current)
            .find(|&prev| dist[slot(grid, prev)] == Some(d - 1))?;
        d -= 1;
    }
    Some(current)
}

/// One step toward `target` along the axis with the larger gap, walls ignored.
/// Ties go to the horizontal axis.
pub fn greedy_step(grid: &Grid, from: Pos, target: Pos) -> Option<Pos> {
    if from == target || !grid.contains(target) {
        return None;
    }
    let dx = target.col.abs_diff(from.col);
    let dy = target.row.abs_diff(from.row);

    let next = if dx >= dy {
        if target.col > from.col {
            Pos::new(from.col + 1, from.row)
        } else {
            Pos::new(from.col - 1, from.row)
        }
    } else if target.row > from.row {
        Pos::new(from.col, from.row + 1)
    } else {
        Pos::new(from.col, from.row - 1)
    };
    Some(next)
}

/// Elapsed-time gate for enemy steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PursuitTimer {
    /// Minimum time between two steps (ms)
    pub interval_ms: u64,
    /// Time after the first observed tick before any step (ms)
    pub start_delay_ms: u64,
    started_at: Option<u64>,
    last_step_at: Option<u64>,
}

impl PursuitTimer {
    pub fn new(interval_ms: u64, start_delay_ms: u64) -> Self {
        Self {
            interval_ms,
            start_delay_ms,
            started_at: None,
            last_step_at: None,
        }
    }

    /// Returns true (and records the step) when a step is allowed at `now_ms`
    pub fn due(&mut self, now_ms: u64) -> bool {
        let started = *self.started_at.get_or_insert(now_ms);
        if now_ms.saturating_sub(started) < self.start_delay_ms {
            return false;
        }
        if let Some(last) = self.last_step_at {
            if now_ms.saturating_sub(last) < self.interval_ms {
                return false;
            }
        }
        self.last_step_at = Some(now_ms);
        true
    }

    /// Push the next step a full interval past `now_ms`
    pub fn hold(&mut self, now_ms: u64) {
        self.started_at.get_or_insert(now_ms);
        self.last_step_at = Some(now_ms);
    }

    pub fn last_step_at(&self) -> Option<u64> {
        self.last_step_at
    }
}
