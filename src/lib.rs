//! Canvas Dino - an endless side-scrolling jump game
//!
//! Core modules:
//! - `sim`: Run state, physics, spawning, collisions and scoring
//! - `frame`: Per-frame orchestration (timing, update, draw, continuation)
//! - `renderer`: 2D drawing surface abstraction and scene painting
//! - `hud`: Score display and restart affordance
//! - `platform`: Input mapping shared by browser and native hosts
//! - `settings`: Runtime settings (seed, log level)

pub mod frame;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use frame::{Continuation, FrameClock, Game};
pub use settings::Settings;

/// Game configuration constants
///
/// Distances are canvas pixels, times are milliseconds.
pub mod consts {
    /// Reference frame duration; elapsed time is scaled by `elapsed / NOMINAL_FRAME_MS`
    pub const NOMINAL_FRAME_MS: f32 = 16.0;
    /// Deltas above this are treated as a stalled host (tab hidden, debugger) and ignored
    pub const MAX_FRAME_DELTA_MS: f64 = 1000.0;
    /// Longest single simulation step; longer frames run as several steps
    pub const MAX_TICK_MS: f32 = 2.0 * NOMINAL_FRAME_MS;

    /// Distance from the bottom of the viewport to the ground line
    pub const GROUND_MARGIN: f32 = 30.0;
    /// Thickness of the drawn ground line
    pub const GROUND_LINE_THICKNESS: f32 = 2.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_GRAVITY: f32 = 0.9;
    /// Upward velocity applied on jump (negative is up)
    pub const PLAYER_JUMP_IMPULSE: f32 = -15.0;

    /// Obstacle size ranges (half-open, whole pixels)
    pub const OBSTACLE_MIN_WIDTH: u32 = 20;
    pub const OBSTACLE_MAX_WIDTH: u32 = 50;
    pub const OBSTACLE_MIN_HEIGHT: u32 = 30;
    pub const OBSTACLE_MAX_HEIGHT: u32 = 60;
    /// Spawn distance past the right edge of the viewport
    pub const OBSTACLE_SPAWN_MARGIN: f32 = 10.0;
    /// Obstacles sink this far below the ground line
    pub const OBSTACLE_GROUND_OFFSET: f32 = 2.0;
    /// Obstacles are dropped once their right edge is left of this x
    pub const OBSTACLE_DESPAWN_X: f32 = -50.0;

    /// Difficulty ramp
    pub const SPAWN_INTERVAL_START: f32 = 1500.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 700.0;
    pub const SPAWN_INTERVAL_STEP: f32 = 20.0;
    pub const SCROLL_SPEED_START: f32 = 4.0;
    pub const SCROLL_SPEED_STEP: f32 = 0.12;

    /// Corner radius for rounded shapes
    pub const CORNER_RADIUS: f32 = 4.0;
}

/// Convert elapsed milliseconds into the per-frame scaling factor
#[inline]
pub fn frame_scale(elapsed_ms: f32) -> f32 {
    elapsed_ms / consts::NOMINAL_FRAME_MS
}

/// Y coordinate of the walkable surface for a viewport of the given height
#[inline]
pub fn ground_line(viewport_height: f32) -> f32 {
    viewport_height - consts::GROUND_MARGIN
}
