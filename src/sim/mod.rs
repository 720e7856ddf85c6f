//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (ticks are the time unit; one integration step per tick)
//! - Seeded RNG only
//! - No rendering, audio, or storage dependencies; side effects surface as
//!   drained [`GameEvent`]s

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use grid::{Brick, BrickGrid};
pub use state::{Ball, GameEvent, GameState, GameStatus, Outcome, Paddle, Snapshot, Viewport};
pub use tick::{FixedStepper, tick};
