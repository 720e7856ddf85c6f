//! Brickout - a breakout simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Data-driven dimensions and tunables with construction validation
//! - `highscores`: Best-score persistence collaborator
//!
//! The engine is pure and synchronous: a fixed-period tick mutates state and
//! emits named [`sim::GameEvent`]s; rendering and audio collaborators consume
//! the pull-only [`sim::Snapshot`] and the drained event buffer. The crate
//! spawns no threads and performs no I/O inside the tick path.

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use highscores::{HighScoreStore, JsonFileStore, MemoryStore};

/// Game configuration constants (playfield units are pixels, time unit is the tick)
pub mod consts {
    /// Fixed simulation tick period in seconds (~60 Hz logic, render-rate independent)
    pub const TICK_SECS: f32 = 0.016;
    /// Maximum ticks consumed per stepper advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Default viewport
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between the paddle and the bottom edge
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Paddle travel per discrete input event
    pub const PADDLE_STEP: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Launch speed in units per tick; conserved across every bounce
    pub const BALL_SPEED: f32 = 4.0;
    /// Canonical ball start point sits this far above the bottom edge
    pub const BALL_START_BOTTOM_OFFSET: f32 = 30.0;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;

    /// Launch angle is drawn uniformly from [-LAUNCH_ANGLE_SPREAD, +LAUNCH_ANGLE_SPREAD]
    /// (radians from vertical, so the ball always starts heading upward)
    pub const LAUNCH_ANGLE_SPREAD: f32 = std::f32::consts::PI / 8.0;
    /// Maximum deflection angle off the paddle edge
    pub const PADDLE_DEFLECT_MAX: f32 = std::f32::consts::FRAC_PI_4;
}
