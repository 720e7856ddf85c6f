//! Game configuration
//!
//! All dimensions and tunables the simulation reads, as a serde-able struct
//! whose defaults mirror [`crate::consts`]. Validation happens once, at
//! construction; the tick path never fails.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rejected configuration input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("viewport dimensions must be positive (got {width}x{height})")]
    InvalidViewport { width: f32, height: f32 },
    #[error("brick grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid { columns: usize, rows: usize },
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
}

/// Dimensions and tunables for a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Initial viewport size (updated later via `set_viewport`)
    pub viewport_width: f32,
    pub viewport_height: f32,

    /// Brick grid shape
    pub columns: usize,
    pub rows: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,

    /// Paddle
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_step: f32,

    /// Ball
    pub ball_radius: f32,
    pub ball_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            columns: BRICK_COLUMNS,
            rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_step: PADDLE_STEP,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
        }
    }
}

impl GameConfig {
    /// Validate the configuration
    ///
    /// The paddle width guard also protects the angle-ratio division in the
    /// paddle deflection computation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport_width <= 0.0 || self.viewport_height <= 0.0 {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        let positive = [
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        // Padding and margins may be zero but not negative
        let non_negative = [
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("paddle_margin", self.paddle_margin),
            ("paddle_step", self.paddle_step),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}
