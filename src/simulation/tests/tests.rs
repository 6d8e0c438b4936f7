use super::*;
use crate::core::vec2::Vec2;
use crate::domain::Direction;
use crate::systems::render::CommandBuffer;

fn surface() -> CommandBuffer {
    CommandBuffer::new(Viewport::new(800.0, 600.0))
}

/// Deliver the pending frame immediately, if any
fn pump(session: &mut GameSession, sched: &mut FixedStepScheduler, surface: &mut CommandBuffer) -> Option<FrameOutcome> {
    let handle = sched.take_now()?;
    Some(session.on_frame(handle, surface, sched).unwrap())
}

#[test]
fn start_centers_player_and_requests_a_frame() {
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::default();
    let surface = surface();

    assert_eq!(session.state(), SessionState::Idle);
    session.start(Some(&surface), &mut sched).unwrap();

    assert_eq!(session.state(), SessionState::Playing);
    let world = session.world().unwrap();
    assert_eq!(world.player.pos, Vec2::new(400.0, 300.0));
    assert_eq!(world.bodies.len(), 4);
    assert_eq!(world.bodies[0].pos, Vec2::new(100.0, 100.0));
    assert!(sched.pending().is_some());
    assert_eq!(session.pending_frame(), sched.pending());
}

#[test]
fn missing_surface_keeps_session_idle() {
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::default();

    let err = session.start(None::<&CommandBuffer>, &mut sched).unwrap_err();

    assert!(matches!(err, EngineError::SurfaceUnavailable(_)));
    assert_eq!(session.state(), SessionState::Idle);
    assert!(sched.pending().is_none());
}

#[test]
fn each_frame_ticks_renders_and_reschedules() {
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::new(10.0);
    let mut surface = surface();
    session.start(Some(&surface), &mut sched).unwrap();

    for _ in 0..5 {
        sched.advance(10.0);
        let handle = sched.take_due().unwrap();
        let outcome = session.on_frame(handle, &mut surface, &mut sched).unwrap();
        assert!(matches!(outcome, FrameOutcome::Ticked(_)));
    }

    assert_eq!(surface.frames(), 5);
    assert_eq!(session.world().unwrap().frame, 5);
    assert!(sched.pending().is_some());
}

#[test]
fn exit_cancels_pending_frame_and_no_more_renders() {
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::default();
    let mut surface = surface();
    session.start(Some(&surface), &mut sched).unwrap();
    pump(&mut session, &mut sched, &mut surface);
    pump(&mut session, &mut sched, &mut surface);
    let stale = sched.pending().unwrap();

    session.exit(&mut sched);

    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(sched.cancelled(), 1);
    assert!(pump(&mut session, &mut sched, &mut surface).is_none());

    // A stale callback delivered anyway is ignored
    let outcome = session.on_frame(stale, &mut surface, &mut sched).unwrap();
    assert_eq!(outcome, FrameOutcome::Skipped);
    assert_eq!(surface.frames(), 2);
    assert!(sched.pending().is_none());
}

#[test]
fn restart_resets_world_to_fixtures() {
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::default();
    let mut surface = surface();

    session.start(Some(&surface), &mut sched).unwrap();
    let fresh = session.world().unwrap().clone();
    session.key_down("d");
    for _ in 0..60 {
        pump(&mut session, &mut sched, &mut surface);
    }
    assert_ne!(session.world().unwrap(), &fresh);

    session.exit(&mut sched);
    session.start(Some(&surface), &mut sched).unwrap();

    assert_eq!(session.world().unwrap(), &fresh);
    assert!(!session.input().is_key_held("d"));
}

#[test]
fn keys_are_ignored_while_idle() {
    let mut session = GameSession::default();
    assert!(!session.key_down("w"));
    assert!(!session.input().is_key_held("w"));
}

#[test]
fn held_key_moves_player_between_frames() {
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::default();
    let mut surface = surface();
    session.start(Some(&surface), &mut sched).unwrap();

    assert!(session.key_down("ArrowLeft"));
    assert!(!session.key_down("Escape"));
    pump(&mut session, &mut sched, &mut surface);
    let after_one = session.world().unwrap().player.pos.x;
    assert!(after_one < 400.0);

    session.key_up("ArrowLeft");
    assert!(!session.input().snapshot().is_held(Direction::Left));
    pump(&mut session, &mut sched, &mut surface);
    // Still coasting left under friction
    assert!(session.world().unwrap().player.pos.x < after_one);
}

#[test]
fn resize_recenters_player_only_while_playing() {
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::default();
    let surface = surface();

    session.resize(Viewport::new(100.0, 100.0));
    assert!(session.world().is_none());

    session.start(Some(&surface), &mut sched).unwrap();
    session.resize(Viewport::new(1000.0, 500.0));
    let world = session.world().unwrap();
    assert_eq!(world.viewport, Viewport::new(1000.0, 500.0));
    assert_eq!(world.player.pos, Vec2::new(500.0, 250.0));
}

#[test]
fn start_while_playing_is_a_noop() {
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::default();
    let mut surface = surface();
    session.start(Some(&surface), &mut sched).unwrap();
    pump(&mut session, &mut sched, &mut surface);
    let frame = session.world().unwrap().frame;

    session.start(Some(&surface), &mut sched).unwrap();
    assert_eq!(session.world().unwrap().frame, frame);
}

#[test]
fn perf_stats_track_frames_when_enabled() {
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::default();
    let mut surface = surface();
    session.start(Some(&surface), &mut sched).unwrap();

    pump(&mut session, &mut sched, &mut surface);
    assert_eq!(session.get_perf_stats(), PerfStats::default());

    session.enable_perf_metrics(true);
    pump(&mut session, &mut sched, &mut surface);
    let stats = session.get_perf_stats();
    assert_eq!(stats.frames(), 2);
    assert_eq!(stats.body_count(), 4);
    assert!(stats.tick_ms() >= 0.0);
    assert!(stats.frame_ms() >= stats.tick_ms());
}

#[test]
fn config_json_drives_fixtures() {
    let json = r##"{ "bodies": [ { "x": 50, "y": 60, "radius": 8, "color": "#00ff00" } ] }"##;
    let mut session = GameSession::from_config_json(json).unwrap();
    let mut sched = FixedStepScheduler::default();
    let surface = surface();
    session.start(Some(&surface), &mut sched).unwrap();

    let world = session.world().unwrap();
    assert_eq!(world.bodies.len(), 1);
    assert_eq!(world.bodies[0].radius, 8.0);
}
