use crate::domain::Viewport;

use super::{GameSession, Phase};

pub(super) fn key_down(session: &mut GameSession, key: &str) -> bool {
    if !session.is_playing() {
        return false;
    }
    session.input.key_down(key)
}

pub(super) fn key_up(session: &mut GameSession, key: &str) -> bool {
    if !session.is_playing() {
        return false;
    }
    session.input.key_up(key)
}

pub(super) fn resize(session: &mut GameSession, viewport: Viewport) {
    if let Phase::Playing(world) = &mut session.phase {
        world.resize(viewport);
        log::debug!("viewport resized to {}x{}", viewport.width, viewport.height);
    }
}
