//! Hitbox Engine - canvas physics toy in WASM
//!
//! A player-driven circle pushes free bodies around a walled arena with
//! friction, gravity and lossy wall bounces.
//!
//! Architecture:
//! - core/       - Vectors, colors, errors, logging
//! - domain/     - Bodies, world state, input, config
//! - systems/    - Physics tick and rendering
//! - simulation/ - Session state machine, frame scheduling, JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging(log::LevelFilter::Info);
    log::info!("Hitbox engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Color, EngineError, Vec2};
pub use domain::{Body, GameConfig, InputSnapshot, InputState, KeyBindings, PhysicsParams, Viewport, WorldState};
pub use simulation::{FixedStepScheduler, FrameHandle, FrameOutcome, FrameScheduler, Game, GameSession, PerfStats, SessionState};
pub use systems::physics::{tick, TickReport};
pub use systems::render::{render_frame, CommandBuffer, Surface};
