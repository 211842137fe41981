//! Scene painting: background, player, obstacles, game-over overlay

use super::{Surface, TextAlign};
use crate::consts::{CORNER_RADIUS, GROUND_LINE_THICKNESS};
use crate::hud::score_text;
use crate::sim::{GameState, Obstacle, Player, Rect};

pub const SKY_COLOR: &str = "#e9f5ff";
pub const GROUND_COLOR: &str = "#6c6c6c";
pub const EYE_COLOR: &str = "#fff";
pub const PUPIL_COLOR: &str = "#000";
pub const OVERLAY_COLOR: &str = "rgba(0,0,0,0.5)";
pub const OVERLAY_TEXT_COLOR: &str = "#fff";

pub const GAME_OVER_TEXT: &str = "GAME OVER";
const TITLE_SIZE: f32 = 28.0;
const SUBTITLE_SIZE: f32 = 18.0;

/// Paint one complete frame for `state`
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    surface.clear();
    draw_background(surface, state.ground_y);
    draw_entities(surface, state);
}

/// Player, then obstacles in spawn order, then the overlay if the run is over
pub fn draw_entities<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    draw_player(surface, &state.player);
    for obstacle in &state.obstacles {
        draw_obstacle(surface, obstacle);
    }
    if state.phase.is_over() {
        draw_game_over(surface, state.score);
    }
}

/// Sky fill and the ground line
pub fn draw_background<S: Surface + ?Sized>(surface: &mut S, ground_y: f32) {
    let (w, h) = (surface.width(), surface.height());
    surface.fill_rect(Rect::new(0.0, 0.0, w, h), SKY_COLOR);
    surface.fill_rect(Rect::new(0.0, ground_y, w, GROUND_LINE_THICKNESS), GROUND_COLOR);
}

/// Rounded body with an eye near the leading edge
pub fn draw_player<S: Surface + ?Sized>(surface: &mut S, player: &Player) {
    let body = player.rect();
    surface.fill_round_rect(body, CORNER_RADIUS, player.color);
    surface.fill_rect(Rect::new(body.right() - 18.0, body.y + 8.0, 8.0, 8.0), EYE_COLOR);
    surface.fill_rect(Rect::new(body.right() - 14.0, body.y + 10.0, 4.0, 4.0), PUPIL_COLOR);
}

pub fn draw_obstacle<S: Surface + ?Sized>(surface: &mut S, obstacle: &Obstacle) {
    surface.fill_round_rect(obstacle.rect(), CORNER_RADIUS, obstacle.color);
}

/// Dim the scene and show the final score
pub fn draw_game_over<S: Surface + ?Sized>(surface: &mut S, score: u64) {
    let (w, h) = (surface.width(), surface.height());
    surface.fill_rect(Rect::new(0.0, 0.0, w, h), OVERLAY_COLOR);

    let cx = w / 2.0;
    let cy = h / 2.0;
    surface.fill_text(GAME_OVER_TEXT, cx, cy - 10.0, TITLE_SIZE, TextAlign::Center, OVERLAY_TEXT_COLOR);
    surface.fill_text(&score_text(score), cx, cy + 20.0, SUBTITLE_SIZE, TextAlign::Center, OVERLAY_TEXT_COLOR);
}
