//! Game state and core simulation types
//!
//! Everything the tick mutates lives here; collaborators only ever see the
//! pull-only [`Snapshot`] and the drained event buffer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Brick, BrickGrid};
use crate::config::{ConfigError, GameConfig};
use crate::consts::*;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every brick destroyed
    Won,
    /// Ball breached the bottom edge
    Lost,
}

/// Top-level game status
///
/// Terminal states halt the simulation; only an explicit [`GameState::reset`]
/// returns to `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    GameOver(Outcome),
}

impl GameStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_playing()
    }
}

/// Named notification emitted by the core
///
/// The audio collaborator maps these to sound cues; the core has no knowledge
/// of whether or how they are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    WallHit,
    PaddleHit,
    BrickHit { col: usize, row: usize },
    GameOver(Outcome),
    HighScoreUpdated(u32),
}

/// Explicit viewport value, replacing ambient window state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

/// The ball: position plus velocity, both in playfield units per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Advance one tick: fixed per-tick step, not wall-clock dt
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Bounce off a vertical surface
    pub fn reflect_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Bounce off a horizontal surface
    pub fn reflect_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Aim the ball by angle from vertical (angle 0 points straight up toward
    /// the bricks). Used at launch and on every paddle bounce.
    pub fn set_velocity_from_angle(&mut self, angle: f32, speed: f32) {
        self.vel = Vec2::new(angle.sin() * speed, -angle.cos() * speed);
    }

    /// Current speed magnitude; invariant across bounces
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge; clamped to `[0, viewport_width - width]`
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Gap between the paddle and the bottom edge
    pub margin: f32,
}

impl Paddle {
    /// Move by `delta`, clamped to the viewport
    pub fn move_by(&mut self, delta: f32, viewport_width: f32) {
        self.x = (self.x + delta).clamp(0.0, (viewport_width - self.width).max(0.0));
    }

    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Y coordinate of the paddle's top face
    pub fn top_edge(&self, viewport_height: f32) -> f32 {
        viewport_height - self.height - self.margin
    }
}

/// Read-only view for the render collaborator, pulled once per display frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub paddle: &'a Paddle,
    pub ball: &'a Ball,
    pub bricks: &'a [Brick],
    pub score: u32,
    pub high_score: u32,
    pub status: GameStatus,
}

/// Complete game state (deterministic per seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Dimensions/tunables, validated at construction
    pub config: GameConfig,
    pub viewport: Viewport,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BrickGrid,
    /// +1 per brick destroyed, monotone within a game
    pub score: u32,
    /// Best score observed so far; owned storage lives with the host
    pub high_score: u32,
    pub status: GameStatus,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given configuration and seed
    ///
    /// Rejects invalid dimensions up front; after this point no operation can
    /// fail mid-tick.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let viewport = Viewport::new(config.viewport_width, config.viewport_height)?;
        let grid = BrickGrid::new(&config, viewport.width);
        let paddle = Paddle {
            x: 0.0,
            width: config.paddle_width,
            height: config.paddle_height,
            margin: config.paddle_margin,
        };
        let ball = Ball::new(Vec2::ZERO, config.ball_radius);

        let mut state = Self {
            config,
            viewport,
            ball,
            paddle,
            grid,
            score: 0,
            high_score: 0,
            status: GameStatus::Playing,
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        state.reset();
        Ok(state)
    }

    /// Start a fresh game: score to zero, all bricks reactivated, ball at the
    /// canonical start point with a fresh launch angle, paddle recentered.
    ///
    /// The only transition out of a terminal status.
    pub fn reset(&mut self) {
        self.score = 0;
        self.status = GameStatus::Playing;
        self.paddle.x = (self.viewport.width - self.paddle.width) / 2.0;
        self.ball.pos = Vec2::new(
            self.viewport.width / 2.0,
            self.viewport.height - BALL_START_BOTTOM_OFFSET,
        );
        // Uniform in [-π/8, π/8]: always heading upward within 22.5° of vertical
        let angle = self
            .rng
            .random_range(-LAUNCH_ANGLE_SPREAD..=LAUNCH_ANGLE_SPREAD);
        self.ball.set_velocity_from_angle(angle, self.config.ball_speed);
        self.grid.reset(self.viewport.width);
        self.events.push(GameEvent::GameStarted);
        log::info!(
            "game started (seed {}, launch angle {:.3} rad)",
            self.seed,
            angle
        );
    }

    /// Move the paddle by `delta`, clamped to the viewport
    ///
    /// No-op while in a terminal status (idle-until-reset semantics).
    pub fn move_paddle(&mut self, delta: f32) {
        if self.status.is_terminal() {
            return;
        }
        self.paddle.move_by(delta, self.viewport.width);
    }

    /// Apply a viewport resize: re-clamp the paddle and re-lay out the grid.
    /// Destroyed bricks stay destroyed.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        self.viewport = Viewport::new(width, height)?;
        self.paddle.move_by(0.0, self.viewport.width);
        self.grid.layout(self.viewport.width);
        log::debug!("viewport resized to {width}x{height}");
        Ok(())
    }

    /// Read-only snapshot for the render collaborator
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            paddle: &self.paddle,
            ball: &self.ball,
            bricks: self.grid.bricks(),
            score: self.score,
            high_score: self.high_score,
            status: self.status,
        }
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn playing_state() -> GameState {
        GameState::new(GameConfig::default(), 7).unwrap()
    }

    #[test]
    fn test_new_starts_playing_with_started_event() {
        let mut state = playing_state();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        let events = state.drain_events();
        assert_eq!(events, vec![GameEvent::GameStarted]);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig {
            viewport_width: -1.0,
            ..Default::default()
        };
        assert!(GameState::new(config, 0).is_err());
    }

    #[test]
    fn test_launch_angle_within_spread() {
        for seed in 0..50 {
            let state = GameState::new(GameConfig::default(), seed).unwrap();
            let ball = state.ball;
            // vy < 0: always launched upward
            assert!(ball.vel.y < 0.0, "seed {seed}: ball must launch upward");
            assert!(
                (ball.speed() - BALL_SPEED).abs() < 1e-4,
                "seed {seed}: launch speed"
            );
            let angle = ball.vel.x.atan2(-ball.vel.y);
            assert!(
                angle.abs() <= LAUNCH_ANGLE_SPREAD + 1e-6,
                "seed {seed}: angle {angle} outside spread"
            );
        }
    }

    #[test]
    fn test_reset_from_game_over() {
        let mut state = playing_state();
        state.grid.destroy(0, 0);
        state.score = 24;
        state.status = GameStatus::GameOver(Outcome::Won);
        state.drain_events();

        state.reset();

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert!(state.grid.bricks().iter().all(|b| b.active));
        assert_eq!(
            state.ball.pos,
            Vec2::new(
                VIEWPORT_WIDTH / 2.0,
                VIEWPORT_HEIGHT - BALL_START_BOTTOM_OFFSET
            )
        );
        assert_eq!(state.paddle.x, (VIEWPORT_WIDTH - PADDLE_WIDTH) / 2.0);
        assert_eq!(state.drain_events(), vec![GameEvent::GameStarted]);
    }

    #[test]
    fn test_move_paddle_clamps_to_viewport() {
        let mut state = playing_state();
        state.move_paddle(-10_000.0);
        assert_eq!(state.paddle.x, 0.0);
        state.move_paddle(10_000.0);
        assert_eq!(state.paddle.x, VIEWPORT_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn test_move_paddle_noop_when_terminal() {
        let mut state = playing_state();
        let before = state.paddle.x;
        state.status = GameStatus::GameOver(Outcome::Lost);
        state.move_paddle(20.0);
        assert_eq!(state.paddle.x, before);
    }

    #[test]
    fn test_set_viewport_preserves_destroyed_bricks() {
        let mut state = playing_state();
        state.grid.destroy(2, 3);
        state.set_viewport(1000.0, 700.0).unwrap();
        assert!(!state.grid.brick(2, 3).active);
        // Grid recentered against the new width
        let min_x = state
            .grid
            .bricks()
            .iter()
            .map(|b| b.x)
            .fold(f32::INFINITY, f32::min);
        assert!((min_x - 292.5).abs() < 1e-3);
    }

    #[test]
    fn test_set_viewport_rejects_non_positive() {
        let mut state = playing_state();
        assert!(state.set_viewport(0.0, 600.0).is_err());
        assert!(state.set_viewport(800.0, -5.0).is_err());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let state = playing_state();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.bricks.len(), BRICK_COLUMNS * BRICK_ROWS);
    }

    proptest! {
        /// Speed magnitude is conserved across any sequence of bounces
        #[test]
        fn prop_speed_conserved_across_bounces(
            launch_angle in -LAUNCH_ANGLE_SPREAD..LAUNCH_ANGLE_SPREAD,
            paddle_angle in -PADDLE_DEFLECT_MAX..PADDLE_DEFLECT_MAX,
            ops in proptest::collection::vec(0u8..3, 0..64),
        ) {
            let mut ball = Ball::new(Vec2::new(400.0, 570.0), BALL_RADIUS);
            ball.set_velocity_from_angle(launch_angle, BALL_SPEED);
            for op in ops {
                match op {
                    0 => ball.reflect_x(),
                    1 => ball.reflect_y(),
                    _ => ball.set_velocity_from_angle(paddle_angle, BALL_SPEED),
                }
                prop_assert!((ball.speed() - BALL_SPEED).abs() < 1e-3);
            }
        }
    }
}
