//! Core functionality shared by every layer

pub mod color;
pub mod error;
pub mod logging;
pub mod vec2;

pub use color::Color;
pub use error::EngineError;
pub use vec2::Vec2;
