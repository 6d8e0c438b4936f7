use crate::core::error::EngineError;
use crate::systems::physics;
use crate::systems::render::{render_frame, Surface};

use super::{lifecycle, FrameHandle, FrameOutcome, FrameScheduler, FrameTimer, GameSession, Phase};

pub(super) fn on_frame<S: Surface + ?Sized>(
    session: &mut GameSession,
    handle: FrameHandle,
    surface: &mut S,
    scheduler: &mut dyn FrameScheduler,
) -> Result<FrameOutcome, EngineError> {
    if session.pending_frame != Some(handle) {
        log::trace!("skipping stale frame {}", handle.raw());
        return Ok(FrameOutcome::Skipped);
    }
    session.pending_frame = None;

    let perf_on = session.perf_enabled;
    let GameSession { config, phase, input, perf_stats, .. } = &mut *session;
    let Phase::Playing(world) = phase else {
        return Ok(FrameOutcome::Skipped);
    };

    // Input is read once; events arriving mid-frame apply next tick
    let snapshot = input.snapshot();

    let report = if perf_on {
        let mut timer = FrameTimer::start();
        let report = physics::tick(world, snapshot, &config.physics);
        let tick_ms = timer.lap_ms();
        render_frame(surface, world, &config.render);
        let render_ms = timer.elapsed_ms();
        perf_stats.record_tick(report, world.body_count(), world.frame);
        perf_stats.record_timings(tick_ms, render_ms, tick_ms + render_ms);
        report
    } else {
        let report = physics::tick(world, snapshot, &config.physics);
        render_frame(surface, world, &config.render);
        report
    };

    match scheduler.schedule() {
        Ok(next) => session.pending_frame = Some(next),
        Err(err) => {
            log::error!("could not schedule next frame, stopping: {}", err);
            lifecycle::exit(session, scheduler);
            return Err(err);
        }
    }

    Ok(FrameOutcome::Ticked(report))
}
