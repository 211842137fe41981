//! `Surface` on top of a browser 2D canvas context

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Surface, TextAlign};
use crate::sim::Rect;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`. Viewport size is the canvas size.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }

    fn round_rect_path(&self, rect: Rect, radius: f32) -> Result<(), JsValue> {
        let (x, y, w, h, r) = (
            rect.x as f64,
            rect.y as f64,
            rect.w as f64,
            rect.h as f64,
            radius as f64,
        );
        self.ctx.begin_path();
        self.ctx.move_to(x + r, y);
        self.ctx.arc_to(x + w, y, x + w, y + h, r)?;
        self.ctx.arc_to(x + w, y + h, x, y + h, r)?;
        self.ctx.arc_to(x, y + h, x, y, r)?;
        self.ctx.arc_to(x, y, x + w, y, r)?;
        self.ctx.close_path();
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        match self.round_rect_path(rect, radius) {
            Ok(()) => self.ctx.fill(),
            Err(e) => log::warn!("rounded rect path failed: {:?}", e),
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size_px: f32, align: TextAlign, color: &str) {
        self.ctx.set_font(&format!("{}px Arial", size_px));
        self.ctx.set_text_align(align.as_str());
        self.ctx.set_fill_style_str(color);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
