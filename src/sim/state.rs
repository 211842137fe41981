//! Game state and core simulation types
//!
//! Everything a single run owns lives here. A restart rebuilds the whole
//! `GameState` apart from its RNG stream.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Rect;
use crate::consts::*;
use crate::ground_line;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Static scene, waiting for the first jump
    #[default]
    Idle,
    /// Physics, spawning, scoring and collisions active
    Running,
    /// Run ended; frozen until restart
    GameOver,
}

/// Inputs and simulation outcomes that can move the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Jump,
    Collision,
    Restart,
}

impl GamePhase {
    /// Phase reached by applying `trigger`, or `None` when the trigger has
    /// no effect in the current phase.
    pub fn transition(self, trigger: Trigger) -> Option<GamePhase> {
        match (self, trigger) {
            (GamePhase::Idle, Trigger::Jump) => Some(GamePhase::Running),
            (GamePhase::Running, Trigger::Collision) => Some(GamePhase::GameOver),
            (_, Trigger::Restart) => Some(GamePhase::Idle),
            _ => None,
        }
    }

    pub fn is_running(self) -> bool {
        self == GamePhase::Running
    }

    pub fn is_over(self) -> bool {
        self == GamePhase::GameOver
    }
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new obstacle entered at the right edge
    Spawned,
    /// An obstacle was passed; carries the new score
    Scored { score: u64 },
    /// The player hit an obstacle; the run is over
    Crashed { score: u64 },
}

/// The player-controlled figure
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub on_ground: bool,
    pub color: &'static str,
}

impl Player {
    /// Player standing on the given ground line
    pub fn new(ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, ground_y - PLAYER_HEIGHT),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            gravity: PLAYER_GRAVITY,
            jump_impulse: PLAYER_JUMP_IMPULSE,
            on_ground: true,
            color: "#2b9348",
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A ground hazard scrolling toward the player
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Set once the right edge is behind the player; guards scoring
    pub passed: bool,
    pub color: &'static str,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Machine-readable summary logged when a run ends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub score: u64,
    pub obstacles_spawned: u32,
    pub final_speed: f32,
    pub final_spawn_interval: f32,
    pub elapsed_ms: f64,
}

/// Complete run state
///
/// Viewport dimensions are fixed for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the obstacle RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub viewport: Vec2,
    pub ground_y: f32,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Time since the last spawn (ms)
    pub spawn_accumulator: f32,
    /// Current time between spawns (ms)
    pub spawn_interval: f32,
    /// Current horizontal obstacle speed (px per nominal frame)
    pub speed: f32,
    pub score: u64,
    /// Total simulated running time (ms)
    pub elapsed_ms: f64,
    next_id: u32,
}

impl GameState {
    /// Create a fresh idle run for a viewport of the given size
    pub fn new(viewport_width: f32, viewport_height: f32, seed: u64) -> Self {
        let ground_y = ground_line(viewport_height);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport: Vec2::new(viewport_width, viewport_height),
            ground_y,
            phase: GamePhase::Idle,
            player: Player::new(ground_y),
            obstacles: Vec::new(),
            spawn_accumulator: 0.0,
            spawn_interval: SPAWN_INTERVAL_START,
            speed: SCROLL_SPEED_START,
            score: 0,
            elapsed_ms: 0.0,
            next_id: 1,
        }
    }

    /// Throw the run away and start over from idle
    ///
    /// The phase moves through `Trigger::Restart`; every other field is
    /// rebuilt for the same viewport. The RNG stream carries on so
    /// consecutive runs see different obstacles.
    pub fn restart(&mut self) {
        self.apply(Trigger::Restart);
        let mut fresh = Self::new(self.viewport.x, self.viewport.y, self.seed);
        fresh.phase = self.phase;
        fresh.rng = self.rng.clone();
        *self = fresh;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Number of obstacles spawned so far this run
    pub fn obstacles_spawned(&self) -> u32 {
        self.next_id - 1
    }

    /// Apply a trigger to the phase. Returns true if the phase changed.
    pub fn apply(&mut self, trigger: Trigger) -> bool {
        match self.phase.transition(trigger) {
            Some(next) if next != self.phase => {
                log::debug!("phase {:?} -> {:?} ({:?})", self.phase, next, trigger);
                self.phase = next;
                true
            }
            _ => false,
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.score,
            obstacles_spawned: self.obstacles_spawned(),
            final_speed: self.speed,
            final_spawn_interval: self.spawn_interval,
            elapsed_ms: self.elapsed_ms,
        }
    }
}
