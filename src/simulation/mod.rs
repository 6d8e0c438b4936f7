//! Game session - Idle/Playing state machine around the physics loop
//!
//! The session owns configuration, input and (while playing) the world.
//! Hosts drive it through a `FrameScheduler`:
//! - `start` enters Playing and requests the first frame
//! - `on_frame` runs one tick + render and requests the next frame
//! - `exit` cancels the outstanding frame and drops the world
//!
//! Keyboard and resize events are forwarded between frames.

use crate::core::error::EngineError;
use crate::domain::{GameConfig, InputState, Viewport, WorldState};
use crate::systems::physics::TickReport;
use crate::systems::render::Surface;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "scheduler/scheduler.rs"]
mod scheduler;
#[path = "scheduler/animation_frame.rs"]
mod animation_frame;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "lifecycle/lifecycle.rs"]
mod lifecycle;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/frame.rs"]
mod frame;
mod facade;

pub use animation_frame::AnimationFrameScheduler;
pub use facade::Game;
pub use perf_stats::PerfStats;
pub use scheduler::{FixedStepScheduler, FrameHandle, FrameScheduler};

use perf_timer::FrameTimer;

/// Observable session state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Start prompt shown, loop not running
    Idle,
    /// Loop running, input accepted
    Playing,
}

/// Result of delivering a frame callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Ticked(TickReport),
    /// Stale or unexpected callback; nothing ran
    Skipped,
}

enum Phase {
    Idle,
    Playing(WorldState),
}

pub struct GameSession {
    config: GameConfig,
    phase: Phase,
    input: InputState,
    pending_frame: Option<FrameHandle>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        init::create_session(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        Ok(Self::new(GameConfig::from_json(json)?))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Idle => SessionState::Idle,
            Phase::Playing(_) => SessionState::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state() == SessionState::Playing
    }

    /// World being simulated, `None` while idle
    pub fn world(&self) -> Option<&WorldState> {
        match &self.phase {
            Phase::Playing(world) => Some(world),
            Phase::Idle => None,
        }
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Idle -> Playing. `None` means no drawing surface could be acquired:
    /// the loop does not start and the session stays idle.
    pub fn start<S: Surface + ?Sized>(
        &mut self,
        surface: Option<&S>,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<(), EngineError> {
        lifecycle::start(self, surface.map(|s| s.viewport()), scheduler)
    }

    /// Playing -> Idle. Cancels the pending frame; no tick runs afterwards.
    pub fn exit(&mut self, scheduler: &mut dyn FrameScheduler) {
        lifecycle::exit(self, scheduler)
    }

    /// Deliver a frame callback: tick, render, schedule the next frame
    pub fn on_frame<S: Surface + ?Sized>(
        &mut self,
        handle: FrameHandle,
        surface: &mut S,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<FrameOutcome, EngineError> {
        frame::on_frame(self, handle, surface, scheduler)
    }

    /// Returns whether the key is tracked (always false while idle)
    pub fn key_down(&mut self, key: &str) -> bool {
        commands::key_down(self, key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        commands::key_up(self, key)
    }

    /// New surface dimensions; recenters the player while playing
    pub fn resize(&mut self, viewport: Viewport) {
        commands::resize(self, viewport)
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
