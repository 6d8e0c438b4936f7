use crate::domain::{Body, Direction, InputSnapshot, PhysicsParams, Viewport};

/// Advance the player one tick: input acceleration, friction, move, clamp.
///
/// Directions are applied one after another, so opposing keys cancel.
pub fn integrate_player(player: &mut Body, input: InputSnapshot, params: &PhysicsParams, viewport: Viewport) {
    let accel = params.player_acceleration;

    if input.is_held(Direction::Up) {
        player.velocity.y -= accel;
    }
    if input.is_held(Direction::Down) {
        player.velocity.y += accel;
    }
    if input.is_held(Direction::Left) {
        player.velocity.x -= accel;
    }
    if input.is_held(Direction::Right) {
        player.velocity.x += accel;
    }

    player.velocity *= params.player_friction;
    player.pos += player.velocity;

    clamp_inside(player, viewport);
}

/// Keep the circle inside the viewport. Velocity is left untouched.
///
/// Low bound first, then high bound: a viewport narrower than the body ends
/// up pinned to the high bound instead of panicking like `f32::clamp`.
pub fn clamp_inside(body: &mut Body, viewport: Viewport) {
    let r = body.radius;

    if body.pos.x < r {
        body.pos.x = r;
    }
    if body.pos.x > viewport.width - r {
        body.pos.x = viewport.width - r;
    }
    if body.pos.y < r {
        body.pos.y = r;
    }
    if body.pos.y > viewport.height - r {
        body.pos.y = viewport.height - r;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;

    const VIEW: Viewport = Viewport::new(800.0, 600.0);

    fn player() -> Body {
        Body::new(400.0, 300.0, 20.0, Color::WHITE)
    }

    #[test]
    fn held_key_accelerates_then_friction_applies() {
        let mut p = player();
        let input = InputSnapshot::from_directions(&[Direction::Right]);
        integrate_player(&mut p, input, &PhysicsParams::default(), VIEW);

        assert!((p.velocity.x - 0.475).abs() < 1e-6);
        assert_eq!(p.velocity.y, 0.0);
        assert!((p.pos.x - 400.475).abs() < 1e-4);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut p = player();
        let input = InputSnapshot::from_directions(&[Direction::Up, Direction::Down, Direction::Left, Direction::Right]);
        integrate_player(&mut p, input, &PhysicsParams::default(), VIEW);
        assert_eq!(p.velocity.x, 0.0);
        assert_eq!(p.velocity.y, 0.0);
        assert_eq!(p.pos.x, 400.0);
    }

    #[test]
    fn friction_decays_geometrically_without_input() {
        let mut p = player().with_velocity(4.0, -2.0);
        for _ in 0..10 {
            integrate_player(&mut p, InputSnapshot::empty(), &PhysicsParams::default(), VIEW);
        }
        let factor = 0.95f32.powi(10);
        assert!((p.velocity.x - 4.0 * factor).abs() < 1e-4);
        assert!((p.velocity.y + 2.0 * factor).abs() < 1e-4);
    }

    #[test]
    fn clamp_keeps_velocity() {
        let mut p = Body::new(795.0, 300.0, 20.0, Color::WHITE).with_velocity(10.0, 0.0);
        integrate_player(&mut p, InputSnapshot::empty(), &PhysicsParams::default(), VIEW);
        assert_eq!(p.pos.x, 780.0);
        assert!((p.velocity.x - 9.5).abs() < 1e-5);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut p = player();
        clamp_inside(&mut p, Viewport::new(10.0, 10.0));
        assert_eq!(p.pos.x, -10.0);
        assert_eq!(p.pos.y, -10.0);
    }
}
