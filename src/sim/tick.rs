//! Fixed timestep simulation tick
//!
//! One tick: integrate the ball, resolve collisions, evaluate terminal
//! conditions. Terminal states make the tick a no-op until `reset`.

use super::collision;
use super::state::GameState;
use crate::consts::{MAX_SUBSTEPS, TICK_SECS};

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    if state.status.is_terminal() {
        return;
    }
    state.time_ticks += 1;
    state.ball.integrate();
    collision::resolve(state);
}

/// Maps wall-clock time onto whole simulation ticks
///
/// The host calls [`FixedStepper::advance`] from its frame loop; render
/// cadence never drives the simulation. Elapsed time is capped per call so a
/// stalled host cannot trigger a catch-up spiral.
#[derive(Debug, Clone, Default)]
pub struct FixedStepper {
    accumulator: f32,
}

impl FixedStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed elapsed wall-clock seconds; runs as many whole ticks as fit.
    /// Returns the number of ticks executed.
    pub fn advance(&mut self, state: &mut GameState, elapsed_secs: f32) -> u32 {
        self.accumulator += elapsed_secs.min(0.1);
        let mut steps = 0;
        while self.accumulator >= TICK_SECS && steps < MAX_SUBSTEPS {
            tick(state);
            self.accumulator -= TICK_SECS;
            steps += 1;
        }
        steps
    }
}
