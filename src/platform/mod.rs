//! Platform abstraction layer
//!
//! Maps raw host input (keyboard codes, pointer presses, button clicks) to
//! game actions. Shared by the browser build and the native demo so the
//! mapping can be tested without a DOM.

use crate::sim::{GamePhase, GameState};

/// A discrete game input with no payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Jump,
    Restart,
}

/// Map a keyboard event to an action
///
/// `code` is the physical key (`KeyboardEvent.code`), `key` the produced
/// value (`KeyboardEvent.key`). Restart from the keyboard only works once the
/// run is over; the restart button is hidden otherwise.
pub fn action_for_key(code: &str, key: &str, phase: GamePhase) -> Option<InputAction> {
    if code == "Space" || key == "ArrowUp" {
        return Some(InputAction::Jump);
    }
    if code == "KeyR" && phase.is_over() {
        return Some(InputAction::Restart);
    }
    None
}

/// Whether the browser's default handling of this key should be suppressed
pub fn should_prevent_default(code: &str, key: &str) -> bool {
    code == "Space" || key == "ArrowUp"
}

/// Lead distance, in frames of scrolling, at which the autopilot jumps
const AUTOPILOT_LEAD_FRAMES: f32 = 5.5;

/// Autopilot for the headless demo: jump when an obstacle is about to reach
/// the player. Starts the run from idle.
pub fn autopilot_wants_jump(state: &GameState) -> bool {
    if !state.phase.is_running() {
        return !state.phase.is_over();
    }
    if !state.player.on_ground {
        return false;
    }
    let player_right = state.player.rect().right();
    let lead = state.speed * AUTOPILOT_LEAD_FRAMES;
    state.obstacles.iter().any(|o| {
        let gap = o.pos.x - player_right;
        !o.passed && gap >= 0.0 && gap < lead
    })
}
