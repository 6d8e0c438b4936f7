use crate::core::vec2::Vec2;
use crate::domain::{Body, PhysicsParams, Viewport};

/// What happened to one free body during a tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BodyEvents {
    pub pushed: bool,
    pub bounces: u32,
}

/// Velocity given to a body overlapping the player: `speed` along the
/// direction from the player's center to the body's center.
/// Coincident centers give angle 0, i.e. a push along +x.
#[inline]
pub fn push_velocity(player_pos: Vec2, body_pos: Vec2, speed: f32) -> Vec2 {
    Vec2::from_angle((body_pos - player_pos).angle()) * speed
}

/// Advance one free body a tick.
///
/// The push overwrites velocity (it does not accumulate), and repeats every
/// tick the overlap persists. Friction and gravity apply regardless.
pub fn integrate_free_body(body: &mut Body, player: &Body, params: &PhysicsParams, viewport: Viewport) -> BodyEvents {
    let mut events = BodyEvents::default();

    if body.overlaps(player) {
        body.velocity = push_velocity(player.pos, body.pos, params.push_speed);
        events.pushed = true;
    }

    body.velocity *= params.body_friction;
    body.velocity.y += params.gravity;

    body.pos += body.velocity;

    let r = body.radius;
    events.bounces += bounce_axis(&mut body.pos.x, &mut body.velocity.x, r, viewport.width, params.restitution);
    events.bounces += bounce_axis(&mut body.pos.y, &mut body.velocity.y, r, viewport.height, params.restitution);

    events
}

/// Clamp one axis to `[r, bound - r]`, inverting and damping velocity on
/// each side crossed. Returns the number of bounces (0..=2).
#[inline]
fn bounce_axis(pos: &mut f32, vel: &mut f32, r: f32, bound: f32, restitution: f32) -> u32 {
    let mut bounces = 0;
    if *pos < r {
        *pos = r;
        *vel = -*vel * restitution;
        bounces += 1;
    }
    if *pos > bound - r {
        *pos = bound - r;
        *vel = -*vel * restitution;
        bounces += 1;
    }
    bounces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;

    const VIEW: Viewport = Viewport::new(800.0, 600.0);

    fn ball(x: f32, y: f32) -> Body {
        Body::new(x, y, 15.0, Color::BLACK)
    }

    #[test]
    fn push_direction_points_away_from_player() {
        let v = push_velocity(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), 2.0);
        assert!((v.x - 1.2).abs() < 1e-5);
        assert!((v.y - 1.6).abs() < 1e-5);
    }

    #[test]
    fn coincident_centers_push_along_x() {
        let v = push_velocity(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 2.0);
        assert!((v.x - 2.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn overlap_overwrites_velocity_then_friction_and_gravity() {
        let player = Body::new(100.0, 100.0, 20.0, Color::WHITE);
        let mut b = ball(103.0, 104.0).with_velocity(-50.0, 70.0);
        let params = PhysicsParams::default();

        let events = integrate_free_body(&mut b, &player, &params, VIEW);

        assert!(events.pushed);
        assert!((b.velocity.x - 1.2 * 0.98).abs() < 1e-5);
        assert!((b.velocity.y - (1.6 * 0.98 + 0.05)).abs() < 1e-5);
        assert!((b.pos.x - (103.0 + 1.2 * 0.98)).abs() < 1e-4);
    }

    #[test]
    fn touching_edges_do_not_push() {
        let player = Body::new(100.0, 100.0, 20.0, Color::WHITE);
        let mut b = ball(135.0, 100.0);
        let events = integrate_free_body(&mut b, &player, &PhysicsParams::default(), VIEW);
        assert!(!events.pushed);
        assert_eq!(b.velocity.x, 0.0);
        assert!((b.velocity.y - 0.05).abs() < 1e-7);
    }

    #[test]
    fn wall_bounce_inverts_only_the_clamped_axis() {
        let player = Body::new(400.0, 300.0, 20.0, Color::WHITE);
        let params = PhysicsParams { gravity: 0.0, body_friction: 1.0, ..PhysicsParams::default() };
        let mut b = ball(16.0, 200.0).with_velocity(-5.0, 3.0);

        let events = integrate_free_body(&mut b, &player, &params, VIEW);

        assert_eq!(events.bounces, 1);
        assert_eq!(b.pos.x, 15.0);
        assert!((b.velocity.x - 4.0).abs() < 1e-6);
        assert_eq!(b.velocity.y, 3.0);
    }

    #[test]
    fn floor_bounce_loses_energy() {
        let player = Body::new(400.0, 100.0, 20.0, Color::WHITE);
        let params = PhysicsParams::default();
        let mut b = ball(300.0, 584.0).with_velocity(0.0, 4.0);

        integrate_free_body(&mut b, &player, &params, VIEW);

        assert_eq!(b.pos.y, 585.0);
        let expected = -(4.0 * 0.98 + 0.05) * 0.8;
        assert!((b.velocity.y - expected).abs() < 1e-5);
    }
}
