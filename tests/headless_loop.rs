use hitbox_engine::domain::{BodySpec, Direction};
use hitbox_engine::{
    tick, Body, Color, CommandBuffer, FixedStepScheduler, GameConfig, GameSession, InputSnapshot, PhysicsParams,
    SessionState, Vec2, Viewport, WorldState,
};

fn inside(body: &Body, viewport: Viewport) -> bool {
    let r = body.radius;
    body.pos.x >= r && body.pos.x <= viewport.width - r && body.pos.y >= r && body.pos.y <= viewport.height - r
}

#[test]
fn push_event_sets_velocity_from_player_to_body() {
    // Body offset (3, 4) from the player: the push is 2 units along (3, 4) / 5.
    let config = GameConfig {
        physics: PhysicsParams { body_friction: 1.0, gravity: 0.0, ..PhysicsParams::default() },
        bodies: vec![BodySpec { x: 3.0, y: 4.0, vx: -7.0, vy: 9.0, radius: 15.0, color: Color::BLACK }],
        ..GameConfig::default()
    };
    let mut world = WorldState::from_config(&config, Viewport::new(1000.0, 1000.0));
    assert_eq!(world.player.pos, Vec2::new(500.0, 500.0));
    world.bodies[0].pos = Vec2::new(503.0, 504.0);

    let report = tick(&mut world, InputSnapshot::empty(), &config.physics);

    assert_eq!(report.pushes, 1);
    let v = world.bodies[0].velocity;
    assert!((v.x - 1.2).abs() < 1e-5, "vx = {}", v.x);
    assert!((v.y - 1.6).abs() < 1e-5, "vy = {}", v.y);
}

#[test]
fn long_run_keeps_every_body_in_bounds() {
    let viewport = Viewport::new(480.0, 320.0);
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::default();
    let mut surface = CommandBuffer::new(viewport);
    session.start(Some(&surface), &mut sched).unwrap();

    let keys = ["w", "d", "s", "a", "ArrowUp", "ArrowRight"];
    for frame in 0..3000 {
        if frame % 97 == 0 {
            let key = keys[(frame / 97) % keys.len()];
            session.key_down(key);
        }
        if frame % 131 == 0 {
            for key in keys {
                session.key_up(key);
            }
        }

        let handle = sched.take_now().unwrap();
        session.on_frame(handle, &mut surface, &mut sched).unwrap();

        let world = session.world().unwrap();
        assert!(inside(&world.player, viewport));
        assert!(world.bodies.iter().all(|b| inside(b, viewport)));
    }
}

#[test]
fn idle_playing_idle_leaves_no_state_behind() {
    let mut session = GameSession::default();
    let mut sched = FixedStepScheduler::default();
    let mut surface = CommandBuffer::new(Viewport::new(640.0, 480.0));

    session.start(Some(&surface), &mut sched).unwrap();
    let initial = session.world().cloned().unwrap();
    session.key_down("s");
    for _ in 0..30 {
        let handle = sched.take_now().unwrap();
        session.on_frame(handle, &mut surface, &mut sched).unwrap();
    }
    session.exit(&mut sched);
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.world().is_none());

    let rendered = surface.frames();
    assert!(sched.take_now().is_none());
    assert_eq!(surface.frames(), rendered);

    session.start(Some(&surface), &mut sched).unwrap();
    assert_eq!(session.world(), Some(&initial));
    assert!(!session.input().snapshot().is_held(Direction::Down));
}
