//! Maze grid and cell wall model
//!
//! Cells are addressed by `(col, row)` value coordinates. Walls between two
//! neighboring cells are stored on both sides and only ever change as a pair.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid query errors. These indicate a caller bug, not a gameplay condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell {pos} is outside the {cols}x{rows} grid")]
    OutOfBounds { pos: Pos, cols: usize, rows: usize },
    #[error("cells {a} and {b} are not grid-adjacent")]
    InvalidAdjacency { a: Pos, b: Pos },
}

/// Cell coordinate (column, row); row 0 is the top of the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub col: usize,
    pub row: usize,
}

impl Pos {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Manhattan distance between two cells
    pub fn manhattan(self, other: Pos) -> usize {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Discrete move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor scan order used everywhere iteration order matters
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction that leads from `a` to the adjacent cell `b`
    pub fn between(a: Pos, b: Pos) -> Option<Direction> {
        if a.row == b.row {
            if b.col == a.col + 1 {
                return Some(Direction::Right);
            }
            if a.col == b.col + 1 {
                return Some(Direction::Left);
            }
        } else if a.col == b.col {
            if b.row == a.row + 1 {
                return Some(Direction::Down);
            }
            if a.row == b.row + 1 {
                return Some(Direction::Up);
            }
        }
        None
    }

    #[inline]
    fn wall_index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// A single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Wall flags indexed by direction (all present on creation)
    walls: [bool; 4],
    /// Carving bookkeeping; only meaningful while a maze is being generated
    pub visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
        }
    }
}

impl Cell {
    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls[dir.wall_index()]
    }

    /// Number of walls still standing around this cell
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|w| **w).count()
    }
}

/// Fixed-size rectangular maze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cols: usize,
    rows: usize,
    /// Row-major cell storage
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully walled, unvisited grid
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.col < self.cols && pos.row < self.rows
    }

    fn check(&self, pos: Pos) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.row * self.cols + pos.col)
        } else {
            Err(GridError::OutOfBounds {
                pos,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    /// Checked cell lookup
    pub fn cell_at(&self, pos: Pos) -> Result<&Cell, GridError> {
        self.check(pos).map(|i| &self.cells[i])
    }

    /// Wall query. Panics if `pos` is outside the grid.
    #[inline]
    pub fn has_wall(&self, pos: Pos, dir: Direction) -> bool {
        self[pos].has_wall(dir)
    }

    /// Neighboring position in `dir`, or `None` at the grid edge
    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        if !self.contains(pos) {
            return None;
        }
        let next = match dir {
            Direction::Up => Pos::new(pos.col, pos.row.checked_sub(1)?),
            Direction::Down => Pos::new(pos.col, pos.row + 1),
            Direction::Left => Pos::new(pos.col.checked_sub(1)?, pos.row),
            Direction::Right => Pos::new(pos.col + 1, pos.row),
        };
        self.contains(next).then_some(next)
    }

    /// Neighbors reachable from `pos` without crossing a wall, in scan order
    pub fn open_neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction::ALL.into_iter().filter_map(move |dir| {
            if self.has_wall(pos, dir) {
                None
            } else {
                self.neighbor(pos, dir)
            }
        })
    }

    /// Remove the wall between two adjacent cells (both sides at once)
    pub fn clear_wall(&mut self, a: Pos, b: Pos) -> Result<(), GridError> {
        self.check(a)?;
        self.check(b)?;
        let dir = Direction::between(a, b).ok_or(GridError::InvalidAdjacency { a, b })?;
        self.open(a, dir, b);
        Ok(())
    }

    /// Mirrored wall removal; `b` must be the in-grid neighbor of `a` in `dir`
    pub(crate) fn open(&mut self, a: Pos, dir: Direction, b: Pos) {
        self[a].walls[dir.wall_index()] = false;
        self[b].walls[dir.opposite().wall_index()] = false;
    }

    /// Count of open wall pairs (each shared wall counted once)
    pub fn open_wall_pairs(&self) -> usize {
        self.positions()
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| self.neighbor(pos, dir).is_some() && !self.has_wall(pos, dir))
                    .count()
            })
            .sum()
    }

    /// Clear all `visited` flags
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (cols, rows) = (self.cols, self.rows);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Pos::new(col, row)))
    }

    /// ASCII rendering with an optional marker glyph per cell
    pub fn render_with(&self, marker: impl Fn(Pos) -> Option<char>) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push('+');
                let up = self.has_wall(Pos::new(col, row), Direction::Up);
                out.push_str(if up { "---" } else { "   " });
            }
            out.push_str("+\n");
            for col in 0..self.cols {
                let pos = Pos::new(col, row);
                out.push(if self.has_wall(pos, Direction::Left) { '|' } else { ' ' });
                out.push(' ');
                out.push(marker(pos).unwrap_or(' '));
                out.push(' ');
            }
            let last = Pos::new(self.cols.saturating_sub(1), row);
            out.push(if self.has_wall(last, Direction::Right) { '|' } else { ' ' });
            out.push('\n');
        }
        for _ in 0..self.cols {
            out.push_str("+---");
        }
        out.push_str("+\n");
        out
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Cell {
        match self.check(pos) {
            Ok(i) => &self.cells[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Cell {
        match self.check(pos) {
            Ok(i) => &mut self.cells[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_| None))
    }
}
