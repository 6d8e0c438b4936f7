//! Game configuration
//!
//! Every field has a default matching the practice room, so an empty JSON
//! object (or no config at all) reproduces the stock toy.

use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::error::EngineError;

use super::body::Body;
use super::input::KeyBindings;

/// Numeric update rules applied each tick
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Velocity added per tick per held direction
    pub player_acceleration: f32,
    /// Per-tick velocity multiplier for the player
    pub player_friction: f32,
    /// Per-tick velocity multiplier for free bodies
    pub body_friction: f32,
    /// Added to free-body vy every tick
    pub gravity: f32,
    /// Speed a free body is given while overlapping the player
    pub push_speed: f32,
    /// Velocity retained (and inverted) on a wall bounce
    pub restitution: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            player_acceleration: 0.5,
            player_friction: 0.95,
            body_friction: 0.98,
            gravity: 0.05,
            push_speed: 2.0,
            restitution: 0.8,
        }
    }
}

/// Initial fixture for one body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
    pub radius: f32,
    pub color: Color,
}

impl BodySpec {
    pub fn spawn(&self) -> Body {
        Body::new(self.x, self.y, self.radius, self.color).with_velocity(self.vx, self.vy)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub grid_spacing: f32,
    pub grid_color: Color,
    pub grid_line_width: f32,
    pub hud_background: Color,
    pub hud_text_color: Color,
    pub hud_font: String,
    /// HUD box as x, y, width, height
    pub hud_rect: [f32; 4],
    pub hud_lines: Vec<String>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_spacing: 50.0,
            grid_color: Color::rgba(75, 123, 179, 0.1),
            grid_line_width: 1.0,
            hud_background: Color::rgba(0, 0, 0, 0.7),
            hud_text_color: Color::WHITE,
            hud_font: "12px Bai Jamjuree".to_string(),
            hud_rect: [10.0, 10.0, 200.0, 80.0],
            hud_lines: vec![
                "Controls:".to_string(),
                "WASD / Arrow Keys: Move".to_string(),
                "Collide with red balls to push them".to_string(),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsParams,
    pub player: BodySpec,
    pub bodies: Vec<BodySpec>,
    pub keys: KeyBindings,
    pub render: RenderStyle,
}

const PLAYER_COLOR: Color = Color::rgb(0x50, 0x76, 0xab);
const BODY_COLOR: Color = Color::rgb(0xb7, 0x5c, 0x5a);

impl Default for GameConfig {
    fn default() -> Self {
        let ball = |x: f32, y: f32| BodySpec { x, y, vx: 0.0, vy: 0.0, radius: 15.0, color: BODY_COLOR };
        Self {
            physics: PhysicsParams::default(),
            player: BodySpec { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0, radius: 20.0, color: PLAYER_COLOR },
            bodies: vec![
                ball(100.0, 100.0),
                ball(200.0, 150.0),
                ball(300.0, 200.0),
                ball(400.0, 250.0),
            ],
            keys: KeyBindings::default(),
            render: RenderStyle::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let p = &self.physics;
        let unit = |name: &str, v: f32| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(EngineError::InvalidConfig(format!("{} must be in [0, 1], got {}", name, v)))
            }
        };
        unit("physics.player_friction", p.player_friction)?;
        unit("physics.body_friction", p.body_friction)?;
        unit("physics.restitution", p.restitution)?;

        let finite = [p.player_acceleration, p.gravity, p.push_speed];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::InvalidConfig("physics values must be finite".to_string()));
        }

        for (i, spec) in std::iter::once(&self.player).chain(&self.bodies).enumerate() {
            if !(spec.radius > 0.0) || !spec.radius.is_finite() {
                return Err(EngineError::InvalidConfig(format!(
                    "body {} radius must be positive, got {}",
                    i, spec.radius
                )));
            }
        }

        if !(self.render.grid_spacing > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "render.grid_spacing must be positive, got {}",
                self.render.grid_spacing
            )));
        }
        Ok(())
    }
}
