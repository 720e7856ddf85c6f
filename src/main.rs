//! Brickout entry point
//!
//! Headless native demo: runs the simulation at the fixed tick cadence with a
//! trivial ball-tracking controller, logs emitted events, and persists the
//! high score through the JSON file store at game over.

use std::time::{Duration, Instant};

use brickout::consts::TICK_SECS;
use brickout::highscores::{HighScoreStore, JsonFileStore};
use brickout::GameConfig;
use brickout::sim::{FixedStepper, GameEvent, GameState, GameStatus};

fn main() {
    env_logger::init();
    log::info!("Brickout (native) starting...");

    let config = GameConfig::default();
    let seed: u64 = rand::random();
    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut store = JsonFileStore::new("brickout_highscore.json");
    state.high_score = store.get();

    let mut stepper = FixedStepper::new();
    let mut last = Instant::now();

    loop {
        std::thread::sleep(Duration::from_secs_f32(TICK_SECS));
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_secs_f32();
        last = now;

        // Demo controller: one discrete input event per frame, toward the ball
        let toward_ball = state.ball.pos.x - state.paddle.center();
        let step = state.config.paddle_step;
        state.move_paddle(toward_ball.clamp(-step, step));

        stepper.advance(&mut state, elapsed);

        for event in state.drain_events() {
            log::debug!("event: {event:?}");
            if let GameEvent::HighScoreUpdated(score) = event {
                store.set(score);
            }
        }

        if let GameStatus::GameOver(outcome) = state.status {
            log::info!(
                "run finished after {} ticks: {outcome:?} with score {}",
                state.time_ticks,
                state.score
            );
            break;
        }
    }
}
