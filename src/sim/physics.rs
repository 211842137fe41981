//! Player physics: gravity, integration, ground clamp, jump

use super::state::Player;
use crate::frame_scale;

/// Integrate the player's vertical motion over `elapsed_ms`
///
/// After integration the bottom edge never sits below `ground_y`.
pub fn integrate_player(player: &mut Player, elapsed_ms: f32, ground_y: f32) {
    let scale = frame_scale(elapsed_ms);
    player.vel_y += player.gravity * scale;
    player.pos.y += player.vel_y * scale;

    if player.bottom() >= ground_y {
        player.pos.y = ground_y - player.size.y;
        player.vel_y = 0.0;
        player.on_ground = true;
    }
}

/// Apply the jump impulse if the player is standing on the ground
///
/// Returns true if the impulse was applied.
pub fn try_jump(player: &mut Player) -> bool {
    if !player.on_ground {
        return false;
    }
    player.vel_y = player.jump_impulse;
    player.on_ground = false;
    true
}
