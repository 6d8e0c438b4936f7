use crate::domain::{GameConfig, InputState, Viewport, WorldState};

use super::perf_stats::PerfStats;
use super::{GameSession, Phase};

pub(super) fn create_session(config: GameConfig) -> GameSession {
    let input = InputState::new(config.keys.clone());
    GameSession {
        config,
        phase: Phase::Idle,
        input,
        pending_frame: None,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Fresh world from the configured fixtures; nothing carries over from a
/// previous session.
pub(super) fn create_world(config: &GameConfig, viewport: Viewport) -> WorldState {
    WorldState::from_config(config, viewport)
}
