//! Score display and restart affordance
//!
//! On WASM: DOM text element plus a restart button toggled with a `hidden` class
//! On Native: records the latest values

/// Label shown before the score
pub const SCORE_LABEL: &str = "Score: ";

/// Text shown in the score sink and on the game-over overlay
pub fn score_text(score: u64) -> String {
    format!("{}{}", SCORE_LABEL, score)
}

/// Sink for the live score and the restart control
pub trait Hud {
    /// Show the current score
    fn set_score(&mut self, score: u64);

    /// Show or hide the restart control
    fn set_restart_visible(&mut self, visible: bool);
}

/// HUD that keeps the latest values in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingHud {
    pub score_text: String,
    pub restart_visible: bool,
    /// Number of score updates received
    pub score_updates: u32,
}

impl RecordingHud {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hud for RecordingHud {
    fn set_score(&mut self, score: u64) {
        self.score_text = score_text(score);
        self.score_updates += 1;
    }

    fn set_restart_visible(&mut self, visible: bool) {
        self.restart_visible = visible;
    }
}

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::DomHud;
