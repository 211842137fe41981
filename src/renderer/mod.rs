//! 2D canvas rendering
//!
//! The game only needs a handful of primitives, so drawing goes through the
//! small `Surface` trait. The browser implements it on a
//! `CanvasRenderingContext2d`; native builds and tests record the calls.

pub mod recording;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::draw_scene;

use crate::sim::Rect;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Drawing target with a fixed viewport
///
/// Colors are CSS color strings.
pub trait Surface {
    /// Viewport width in pixels
    fn width(&self) -> f32;

    /// Viewport height in pixels
    fn height(&self) -> f32;

    /// Erase the whole viewport
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: &str);

    /// Fill a rectangle with rounded corners
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: &str);

    /// Draw a line of text anchored at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, align: TextAlign, color: &str);
}
