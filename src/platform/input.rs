//! Touch input translation
//!
//! Maps pointer positions in view space to discrete move intents. The view is
//! y-down, the maze is centered with a one-cell margin.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Direction, Pos};

/// Placement of the maze inside a view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Side length of one cell in view units
    pub cell_size: f32,
    /// Top-left corner of the maze in view space
    pub origin: Vec2,
    pub cols: usize,
    pub rows: usize,
}

impl BoardLayout {
    /// Largest square cells that fit `view` while leaving one cell of margin
    pub fn fit(view: Vec2, cols: usize, rows: usize) -> Self {
        let cell_size = (view.x / (cols + 1) as f32).min(view.y / (rows + 1) as f32);
        let board = Vec2::new(cols as f32, rows as f32) * cell_size;
        Self {
            cell_size,
            origin: (view - board) / 2.0,
            cols,
            rows,
        }
    }

    /// Center of `pos` in view space
    pub fn cell_center(&self, pos: Pos) -> Vec2 {
        self.origin + (Vec2::new(pos.col as f32, pos.row as f32) + 0.5) * self.cell_size
    }

    /// Cell under a view-space point
    pub fn cell_at(&self, point: Vec2) -> Option<Pos> {
        let local = (point - self.origin) / self.cell_size;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let pos = Pos::new(local.x as usize, local.y as usize);
        (pos.col < self.cols && pos.row < self.rows).then_some(pos)
    }
}

/// Direction implied by dragging to `touch` while the player sits at `player`.
///
/// Nothing happens until the pointer is more than one cell away on some axis;
/// then the dominant axis wins.
pub fn drag_direction(layout: &BoardLayout, player: Pos, touch: Vec2) -> Option<Direction> {
    let delta = touch - layout.cell_center(player);
    let abs = delta.abs();
    if abs.x <= layout.cell_size && abs.y <= layout.cell_size {
        return None;
    }
    let dir = if abs.x > abs.y {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_centers_board() {
        // Portrait view: width limits the cell size
        let layout = BoardLayout::fit(Vec2::new(160.0, 320.0), 15, 15);
        assert_eq!(layout.cell_size, 10.0);
        assert_eq!(layout.origin, Vec2::new(5.0, 85.0));
    }

    #[test]
    fn test_cell_center_and_lookup() {
        let layout = BoardLayout::fit(Vec2::new(160.0, 160.0), 15, 15);
        let center = layout.cell_center(Pos::new(3, 7));
        assert_eq!(center, Vec2::new(40.0, 80.0));
        assert_eq!(layout.cell_at(center), Some(Pos::new(3, 7)));
        assert_eq!(layout.cell_at(Vec2::new(1.0, 1.0)), None);
        assert_eq!(layout.cell_at(Vec2::new(158.0, 80.0)), None);
    }

    #[test]
    fn test_small_drag_does_nothing() {
        let layout = BoardLayout::fit(Vec2::new(160.0, 160.0), 15, 15);
        let player = Pos::new(5, 5);
        let center = layout.cell_center(player);
        assert_eq!(drag_direction(&layout, player, center + Vec2::new(9.0, -9.0)), None);
    }

    #[test]
    fn test_dominant_axis_wins() {
        let layout = BoardLayout::fit(Vec2::new(160.0, 160.0), 15, 15);
        let player = Pos::new(5, 5);
        let center = layout.cell_center(player);

        let cases = [
            (Vec2::new(15.0, 3.0), Direction::Right),
            (Vec2::new(-15.0, 3.0), Direction::Left),
            (Vec2::new(4.0, 12.0), Direction::Down),
            (Vec2::new(4.0, -12.0), Direction::Up),
        ];
        for (offset, expected) in cases {
            assert_eq!(drag_direction(&layout, player, center + offset), Some(expected));
        }
    }
}
