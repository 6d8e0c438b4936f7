//! Domain types: bodies, world state, input and configuration

pub mod body;
pub mod config;
pub mod input;
pub mod viewport;
pub mod world;

pub use body::Body;
pub use config::{BodySpec, GameConfig, PhysicsParams, RenderStyle};
pub use input::{Direction, InputSnapshot, InputState, KeyBindings};
pub use viewport::Viewport;
pub use world::WorldState;
