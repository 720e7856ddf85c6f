//! The destructible brick grid
//!
//! A fixed `columns × rows` collection of bricks. Dimensions never change
//! after construction; only layout coordinates and `active` flags mutate.
//! Write access to `active` belongs to the collision pass and [`BrickGrid::reset`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// A single brick cell
///
/// Position is assigned by the layout pass; `active` flips to `false` exactly
/// once per game, when the ball intersects it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

/// Owned 2-D grid of bricks, stored row-major
#[derive(Debug, Clone)]
pub struct BrickGrid {
    columns: usize,
    rows: usize,
    brick_width: f32,
    brick_height: f32,
    padding: f32,
    offset_top: f32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Build a fully active grid laid out against the given viewport width
    pub fn new(config: &GameConfig, viewport_width: f32) -> Self {
        let mut grid = Self {
            columns: config.columns,
            rows: config.rows,
            brick_width: config.brick_width,
            brick_height: config.brick_height,
            padding: config.brick_padding,
            offset_top: config.brick_offset_top,
            bricks: vec![
                Brick {
                    x: 0.0,
                    y: 0.0,
                    active: true
                };
                config.columns * config.rows
            ],
        };
        grid.layout(viewport_width);
        grid
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn brick_width(&self) -> f32 {
        self.brick_width
    }

    pub fn brick_height(&self) -> f32 {
        self.brick_height
    }

    /// All bricks, row-major
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn brick(&self, col: usize, row: usize) -> &Brick {
        &self.bricks[self.index(col, row)]
    }

    fn index(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < self.columns && row < self.rows);
        row * self.columns + col
    }

    /// Recompute every brick's position so the grid is horizontally centered.
    /// Idempotent; touches coordinates only, never `active` flags.
    pub fn layout(&mut self, viewport_width: f32) {
        let total_width = self.columns as f32 * (self.brick_width + self.padding) - self.padding;
        let offset_x = (viewport_width - total_width) / 2.0;
        for row in 0..self.rows {
            for col in 0..self.columns {
                let idx = self.index(col, row);
                self.bricks[idx].x = offset_x + col as f32 * (self.brick_width + self.padding);
                self.bricks[idx].y =
                    row as f32 * (self.brick_height + self.padding) + self.offset_top;
            }
        }
    }

    /// Deactivate one brick. No-op if already inactive; the collision pass
    /// checks `active` before calling this, so it never fires twice for one cell.
    pub fn destroy(&mut self, col: usize, row: usize) {
        let idx = self.index(col, row);
        self.bricks[idx].active = false;
    }

    /// True iff every brick has been destroyed
    pub fn all_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| !b.active)
    }

    /// Number of bricks still active
    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// Whether the brick's rectangle contains the given point
    pub fn contains_point(&self, col: usize, row: usize, point: Vec2) -> bool {
        let brick = self.brick(col, row);
        point.x >= brick.x
            && point.x <= brick.x + self.brick_width
            && point.y >= brick.y
            && point.y <= brick.y + self.brick_height
    }

    /// Reactivate every brick and re-lay the grid out
    pub fn reset(&mut self, viewport_width: f32) {
        for brick in &mut self.bricks {
            brick.active = true;
        }
        self.layout(viewport_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_grid() -> BrickGrid {
        BrickGrid::new(&GameConfig::default(), 800.0)
    }

    #[test]
    fn test_layout_centers_grid() {
        let grid = default_grid();
        // 5 columns of 75 + 10 padding, minus trailing padding: 415 wide
        let left = grid
            .bricks()
            .iter()
            .map(|b| b.x)
            .fold(f32::INFINITY, f32::min);
        let right = grid
            .bricks()
            .iter()
            .map(|b| b.x + grid.brick_width())
            .fold(f32::NEG_INFINITY, f32::max);
        let left_margin = left;
        let right_margin = 800.0 - right;
        assert!((left_margin - right_margin).abs() <= 1.0);
        assert!(left >= 0.0 && right <= 800.0);
    }

    #[test]
    fn test_layout_row_positions() {
        let grid = default_grid();
        assert_eq!(grid.brick(0, 0).y, 30.0);
        assert_eq!(grid.brick(0, 1).y, 60.0);
        assert_eq!(grid.brick(0, 4).y, 150.0);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut grid = default_grid();
        let before = grid.bricks().to_vec();
        grid.layout(800.0);
        assert_eq!(grid.bricks(), &before[..]);
    }

    #[test]
    fn test_destroy_is_permanent_and_idempotent() {
        let mut grid = default_grid();
        grid.destroy(1, 2);
        assert!(!grid.brick(1, 2).active);
        grid.destroy(1, 2);
        assert!(!grid.brick(1, 2).active);
        assert_eq!(grid.active_count(), 24);
    }

    #[test]
    fn test_all_destroyed() {
        let mut grid = default_grid();
        assert!(!grid.all_destroyed());
        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                grid.destroy(col, row);
            }
        }
        assert!(grid.all_destroyed());
    }

    #[test]
    fn test_reset_reactivates_and_relayouts() {
        let mut grid = default_grid();
        grid.destroy(0, 0);
        grid.destroy(4, 4);
        grid.reset(1000.0);
        assert_eq!(grid.active_count(), 25);
        let left = grid
            .bricks()
            .iter()
            .map(|b| b.x)
            .fold(f32::INFINITY, f32::min);
        assert!((left - 292.5).abs() < 1e-3);
    }

    #[test]
    fn test_contains_point() {
        let grid = default_grid();
        let brick = *grid.brick(0, 0);
        let inside = Vec2::new(brick.x + 1.0, brick.y + 1.0);
        let outside = Vec2::new(brick.x - 1.0, brick.y + 1.0);
        assert!(grid.contains_point(0, 0, inside));
        assert!(!grid.contains_point(0, 0, outside));
    }
}
