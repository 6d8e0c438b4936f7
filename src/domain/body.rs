use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::vec2::Vec2;

/// Circular physics body - the player or a free body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// World position (center)
    pub pos: Vec2,
    /// Velocity vector (pixels per tick)
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Body {
    pub fn new(x: f32, y: f32, radius: f32, color: Color) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            radius,
            color,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    /// Circle overlap test (strict: touching edges do not overlap)
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }
}
