//! Systems run once per tick: physics then rendering

pub mod physics;
pub mod render;
