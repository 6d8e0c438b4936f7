use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::color::Color;
use crate::core::error::{describe_js, EngineError};
use crate::core::vec2::Vec2;
use crate::domain::Viewport;

use super::Surface;

/// `<canvas>` backed surface
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| EngineError::SurfaceUnavailable(describe_js(&err)))?
            .ok_or_else(|| EngineError::SurfaceUnavailable("2d context not supported".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::SurfaceUnavailable("context is not a CanvasRenderingContext2d".to_string()))?;

        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the element's layout size
    pub fn sync_size(&self) -> Viewport {
        let width = self.canvas.client_width().max(0) as u32;
        let height = self.canvas.client_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Viewport::from_pixels(width, height)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        Viewport::from_pixels(self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self) {
        let Viewport { width, height } = self.viewport();
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(err) = self.ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU) {
            log::trace!("arc rejected: {}", describe_js(&err));
            return;
        }
        self.ctx.fill();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_text(&mut self, text: &str, at: Vec2, color: Color, font: &str) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(font);
        if let Err(err) = self.ctx.fill_text(text, at.x as f64, at.y as f64) {
            log::trace!("fill_text rejected: {}", describe_js(&err));
        }
    }
}
