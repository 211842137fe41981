//! Per-frame simulation step
//!
//! Order within a running tick: spawn check, player physics, obstacle
//! advance and scoring, collision check. `advance` splits a frame into
//! ticks no longer than `MAX_TICK_MS`.

use super::physics::{integrate_player, try_jump};
use super::spawner::advance_spawner;
use super::state::{GameEvent, GameState, Trigger};
use crate::consts::{MAX_TICK_MS, OBSTACLE_DESPAWN_X};
use crate::frame_scale;

/// Handle a jump input
///
/// Ignored once the run is over. The first jump starts the run. Returns true
/// if this jump started the run.
pub fn jump(state: &mut GameState) -> bool {
    if state.phase.is_over() {
        return false;
    }
    let started = state.apply(Trigger::Jump);
    if started {
        log::info!("run started (seed {})", state.seed);
    }
    try_jump(&mut state.player);
    started
}

/// Advance the run by a whole frame of `elapsed_ms`
///
/// Runs `tick` in steps of at most `MAX_TICK_MS`, so an obstacle moves at
/// most `speed * 2` pixels between collision checks. Stops early once the
/// run ends.
pub fn advance(state: &mut GameState, elapsed_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let mut remaining = elapsed_ms;
    while remaining > 0.0 && state.phase.is_running() {
        let step = remaining.min(MAX_TICK_MS);
        remaining -= step;
        events.extend(tick(state, step));
    }
    events
}

/// Advance the run by a single step of `elapsed_ms`
///
/// Does nothing unless the run is in progress. Events are returned in the
/// order they happened.
pub fn tick(state: &mut GameState, elapsed_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    // Zero-length steps are skipped; a fresh jump must survive until time advances
    if !state.phase.is_running() || elapsed_ms <= 0.0 {
        return events;
    }
    state.elapsed_ms += elapsed_ms as f64;

    if let Some(event) = advance_spawner(state, elapsed_ms) {
        events.push(event);
    }

    integrate_player(&mut state.player, elapsed_ms, state.ground_y);

    // Advance and score in one pass
    let dx = state.speed * frame_scale(elapsed_ms);
    let player_left = state.player.pos.x;
    for obstacle in state.obstacles.iter_mut() {
        obstacle.pos.x -= dx;
        if !obstacle.passed && obstacle.right() < player_left {
            obstacle.passed = true;
            state.score += 1;
            events.push(GameEvent::Scored { score: state.score });
        }
    }
    state.obstacles.retain(|o| o.right() >= OBSTACLE_DESPAWN_X);

    let player_rect = state.player.rect();
    if state.obstacles.iter().any(|o| player_rect.intersects(&o.rect())) {
        state.apply(Trigger::Collision);
        log::info!("crashed with score {}", state.score);
        events.push(GameEvent::Crashed { score: state.score });
    }

    events
}
