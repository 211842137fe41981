//! Headless surface that records draw calls
//!
//! Used by the native build and by tests. Each `clear` starts a new frame,
//! so `commands` only ever holds the most recent frame.

use super::{Surface, TextAlign};
use crate::sim::Rect;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        rect: Rect,
        color: String,
    },
    RoundRect {
        rect: Rect,
        radius: f32,
        color: String,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size_px: f32,
        align: TextAlign,
        color: String,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
    /// Number of frames started (calls to `clear`)
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            frames: 0,
        }
    }

    /// Text drawn in the current frame, in draw order
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color: color.to_string(),
        });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: &str) {
        self.commands.push(DrawCommand::RoundRect {
            rect,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, align: TextAlign, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size_px,
            align,
            color: color.to_string(),
        });
    }
}
