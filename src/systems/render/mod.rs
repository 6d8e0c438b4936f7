//! Frame rendering over an abstract 2D raster surface
//!
//! Draw order: clear, background grid, player, free bodies, HUD.

mod canvas;
mod commands;

pub use canvas::CanvasSurface;
pub use commands::{CommandBuffer, DrawCommand};

use crate::core::color::Color;
use crate::core::vec2::Vec2;
use crate::domain::{Body, RenderStyle, Viewport, WorldState};

/// Minimal 2D drawing API the loop needs
pub trait Surface {
    /// Current pixel dimensions of the drawing area
    fn viewport(&self) -> Viewport;

    fn clear(&mut self);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    fn fill_text(&mut self, text: &str, at: Vec2, color: Color, font: &str);
}

/// First HUD text baseline, relative to the HUD box origin
const HUD_TEXT_OFFSET: Vec2 = Vec2::new(10.0, 20.0);
const HUD_LINE_HEIGHT: f32 = 20.0;

pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, world: &WorldState, style: &RenderStyle) {
    surface.clear();
    draw_grid(surface, world.viewport, style);

    draw_body(surface, &world.player);
    for body in &world.bodies {
        draw_body(surface, body);
    }

    draw_hud(surface, style);
}

/// Cosmetic reference grid: vertical then horizontal lines every `grid_spacing` px
fn draw_grid<S: Surface + ?Sized>(surface: &mut S, viewport: Viewport, style: &RenderStyle) {
    let step = style.grid_spacing;
    if !(step > 0.0) {
        return;
    }

    let mut x = 0.0;
    while x < viewport.width {
        surface.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, viewport.height), style.grid_color, style.grid_line_width);
        x += step;
    }

    let mut y = 0.0;
    while y < viewport.height {
        surface.stroke_line(Vec2::new(0.0, y), Vec2::new(viewport.width, y), style.grid_color, style.grid_line_width);
        y += step;
    }
}

#[inline]
fn draw_body<S: Surface + ?Sized>(surface: &mut S, body: &Body) {
    surface.fill_circle(body.pos, body.radius, body.color);
}

fn draw_hud<S: Surface + ?Sized>(surface: &mut S, style: &RenderStyle) {
    let [x, y, w, h] = style.hud_rect;
    surface.fill_rect(Vec2::new(x, y), Vec2::new(w, h), style.hud_background);

    for (i, line) in style.hud_lines.iter().enumerate() {
        let at = Vec2::new(x + HUD_TEXT_OFFSET.x, y + HUD_TEXT_OFFSET.y + i as f32 * HUD_LINE_HEIGHT);
        surface.fill_text(line, at, style.hud_text_color, &style.hud_font);
    }
}
