use crate::core::error::EngineError;
use crate::domain::Viewport;

use super::{init, FrameScheduler, GameSession, Phase};

pub(super) fn start(
    session: &mut GameSession,
    viewport: Option<Viewport>,
    scheduler: &mut dyn FrameScheduler,
) -> Result<(), EngineError> {
    if session.is_playing() {
        log::debug!("start ignored: already playing");
        return Ok(());
    }

    let Some(viewport) = viewport else {
        let err = EngineError::SurfaceUnavailable("no drawing surface".to_string());
        log::warn!("game not started: {}", err);
        return Err(err);
    };

    let world = init::create_world(&session.config, viewport);
    session.input.clear();
    session.perf_stats.reset();

    // Nothing changes state until the first frame is actually requested
    let handle = scheduler.schedule()?;
    session.pending_frame = Some(handle);
    session.phase = Phase::Playing(world);

    log::info!(
        "game started: {}x{} viewport, {} bodies",
        viewport.width,
        viewport.height,
        session.config.bodies.len()
    );
    Ok(())
}

pub(super) fn exit(session: &mut GameSession, scheduler: &mut dyn FrameScheduler) {
    if let Some(handle) = session.pending_frame.take() {
        scheduler.cancel(handle);
    }
    session.input.clear();

    let previous = std::mem::replace(&mut session.phase, Phase::Idle);
    if let Phase::Playing(world) = previous {
        log::info!("game exited after {} frames", world.frame);
    }
}
