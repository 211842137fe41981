//! Obstacle spawning and the difficulty ramp
//!
//! Every spawn shortens the interval to the next one (down to a floor) and
//! speeds up scrolling. Speed is never capped.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Obstacle};
use crate::consts::*;

/// Build an obstacle just past the right edge, resting on the ground line
pub fn spawn_obstacle<R: Rng + ?Sized>(rng: &mut R, id: u32, viewport_width: f32, ground_y: f32) -> Obstacle {
    let w = rng.random_range(OBSTACLE_MIN_WIDTH..OBSTACLE_MAX_WIDTH) as f32;
    let h = rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT) as f32;
    Obstacle {
        id,
        pos: Vec2::new(
            viewport_width + OBSTACLE_SPAWN_MARGIN,
            ground_y - h + OBSTACLE_GROUND_OFFSET,
        ),
        size: Vec2::new(w, h),
        passed: false,
        color: "#6b4f4f",
    }
}

/// Accumulate elapsed time and spawn when the interval is exceeded
///
/// Returns `Some(GameEvent::Spawned)` when an obstacle was added.
pub fn advance_spawner(state: &mut GameState, elapsed_ms: f32) -> Option<GameEvent> {
    state.spawn_accumulator += elapsed_ms;
    if state.spawn_accumulator <= state.spawn_interval {
        return None;
    }

    state.spawn_accumulator = 0.0;
    let id = state.next_entity_id();
    let obstacle = spawn_obstacle(&mut state.rng, id, state.viewport.x, state.ground_y);
    state.obstacles.push(obstacle);

    state.spawn_interval = (state.spawn_interval - SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_MIN);
    state.speed += SCROLL_SPEED_STEP;

    log::debug!(
        "spawned obstacle {} (interval {:.0}ms, speed {:.2})",
        id,
        state.spawn_interval,
        state.speed
    );
    Some(GameEvent::Spawned)
}
