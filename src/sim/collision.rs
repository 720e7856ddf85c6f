//! Collision detection and response
//!
//! Runs once per tick in a fixed order, because several contacts can occur on
//! the same tick and must resolve deterministically: walls are positional
//! corrections and go first, the bottom-edge loss check halts the tick, the
//! paddle deflection reads the post-wall position, and the brick pass reads
//! every `active` flag before mutating any of them.

use super::state::{Ball, GameEvent, GameState, GameStatus, Outcome, Paddle, Viewport};

/// Resolve one tick's collisions against the ball's freshly integrated position
pub fn resolve(state: &mut GameState) {
    resolve_walls(&mut state.ball, &state.viewport, &mut state.events);

    if breaches_bottom(&state.ball, &state.viewport) {
        // Loss: no reposition, no reflection; resolution stops here
        resolve_loss(state);
        return;
    }

    resolve_paddle(
        &mut state.ball,
        &state.paddle,
        &state.viewport,
        state.config.ball_speed,
        &mut state.events,
    );

    resolve_bricks(state);
}

/// Side and top walls: clamp the leading edge to the boundary and reflect
fn resolve_walls(ball: &mut Ball, viewport: &Viewport, events: &mut Vec<GameEvent>) {
    let r = ball.radius;

    if ball.pos.x + r > viewport.width {
        ball.pos.x = viewport.width - r;
        ball.reflect_x();
        events.push(GameEvent::WallHit);
    } else if ball.pos.x - r < 0.0 {
        ball.pos.x = r;
        ball.reflect_x();
        events.push(GameEvent::WallHit);
    }

    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
        ball.reflect_y();
        events.push(GameEvent::WallHit);
    }
}

/// Has the ball's bottom edge crossed the viewport bottom?
fn breaches_bottom(ball: &Ball, viewport: &Viewport) -> bool {
    ball.pos.y + ball.radius > viewport.height
}

/// Transition to `GameOver(Lost)`; the high score comparison happens on the
/// loss path only, so a won game never emits `HighScoreUpdated`.
fn resolve_loss(state: &mut GameState) {
    state.status = GameStatus::GameOver(Outcome::Lost);
    state.events.push(GameEvent::GameOver(Outcome::Lost));
    log::info!("game over: ball past the bottom edge (score {})", state.score);
    if state.score > state.high_score {
        state.high_score = state.score;
        state.events.push(GameEvent::HighScoreUpdated(state.score));
        log::info!("new high score: {}", state.score);
    }
}

/// Paddle bounce: deflection angle proportional to where the ball struck.
/// Center hit goes straight up, edge hits deflect up to ±45°.
fn resolve_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    viewport: &Viewport,
    speed: f32,
    events: &mut Vec<GameEvent>,
) {
    let on_paddle_band = ball.pos.y + ball.radius >= paddle.top_edge(viewport.height);
    let over_paddle = ball.pos.x >= paddle.x && ball.pos.x <= paddle.x + paddle.width;
    if on_paddle_band && over_paddle {
        let hit_offset = ball.pos.x - paddle.center();
        // paddle.width is validated positive, so the ratio is always defined
        let angle = hit_offset / (paddle.width / 2.0) * crate::consts::PADDLE_DEFLECT_MAX;
        ball.set_velocity_from_angle(angle, speed);
        events.push(GameEvent::PaddleHit);
    }
}

/// Brick pass: point-in-rectangle against the ball center, reading every
/// `active` flag before any mutation so one destruction can never re-trigger
/// another cell in the same tick. Each hit flips vertical velocity regardless
/// of the struck face (intended simplification).
fn resolve_bricks(state: &mut GameState) {
    let mut hits: Vec<(usize, usize)> = Vec::new();
    for row in 0..state.grid.rows() {
        for col in 0..state.grid.columns() {
            if state.grid.brick(col, row).active
                && state.grid.contains_point(col, row, state.ball.pos)
            {
                hits.push((col, row));
            }
        }
    }

    for &(col, row) in &hits {
        state.grid.destroy(col, row);
        state.score += 1;
        state.ball.reflect_y();
        state.events.push(GameEvent::BrickHit { col, row });
    }

    if !hits.is_empty() && state.grid.all_destroyed() {
        state.status = GameStatus::GameOver(Outcome::Won);
        state.events.push(GameEvent::GameOver(Outcome::Won));
        log::info!("game won: all bricks destroyed (score {})", state.score);
    }
}
