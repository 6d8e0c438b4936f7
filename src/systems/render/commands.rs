use crate::core::color::Color;
use crate::core::vec2::Vec2;
use crate::domain::Viewport;

use super::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line { from: Vec2, to: Vec2, color: Color, width: f32 },
    Circle { center: Vec2, radius: f32, color: Color },
    Rect { origin: Vec2, size: Vec2, color: Color },
    Text { text: String, at: Vec2, color: Color, font: String },
}

/// Headless surface that records draw calls instead of rasterizing them.
/// Used for native runs and to observe what a frame drew.
#[derive(Clone, Debug, Default)]
pub struct CommandBuffer {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
    frames: u32,
}

impl CommandBuffer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, commands: Vec::new(), frames: 0 }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Commands drawn since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started (clears) over the buffer's lifetime
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl Surface for CommandBuffer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { origin, size, color });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, color: Color, font: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            color,
            font: font.to_string(),
        });
    }
}
