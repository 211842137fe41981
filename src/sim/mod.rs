//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Elapsed time is passed in, never read from a clock
//! - Seeded RNG only
//! - Obstacles iterate in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, intersects};
pub use physics::{integrate_player, try_jump};
pub use spawner::{advance_spawner, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player, RunSummary, Trigger};
pub use tick::{advance, jump, tick};
