use serde::{Deserialize, Serialize};

use super::body::Body;
use super::config::GameConfig;
use super::viewport::Viewport;

/// Everything the tick function reads and writes.
/// Built fresh on every transition into Playing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub player: Body,
    pub bodies: Vec<Body>,
    pub viewport: Viewport,
    /// Ticks run since the world was created
    pub frame: u64,
}

impl WorldState {
    /// Spawn the configured fixtures and center the player in `viewport`
    pub fn from_config(config: &GameConfig, viewport: Viewport) -> Self {
        let mut world = Self {
            player: config.player.spawn(),
            bodies: config.bodies.iter().map(|spec| spec.spawn()).collect(),
            viewport,
            frame: 0,
        };
        world.player.pos = viewport.center();
        world
    }

    /// Apply new surface dimensions and recenter the player
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.player.pos = viewport.center();
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
