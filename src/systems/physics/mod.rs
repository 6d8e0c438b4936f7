//! Per-tick physics: player integration, push events, gravity, wall bounce
//!
//! The player moves first; every free body then reacts to the player's
//! updated position. Free bodies never interact with each other.

mod free_body;
mod player;

pub use free_body::{integrate_free_body, push_velocity, BodyEvents};
pub use player::{clamp_inside, integrate_player};

use serde::Serialize;

use crate::domain::{Body, InputSnapshot, PhysicsParams, Viewport, WorldState};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many free bodies the parallel pass is not worth the dispatch
#[cfg(feature = "parallel")]
const PARALLEL_BODY_THRESHOLD: usize = 256;

/// Counters for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Free bodies pushed by the player this tick
    pub pushes: u32,
    /// Wall bounces across all free bodies
    pub bounces: u32,
}

impl TickReport {
    fn record(mut self, events: BodyEvents) -> Self {
        self.pushes += events.pushed as u32;
        self.bounces += events.bounces;
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            pushes: self.pushes + other.pushes,
            bounces: self.bounces + other.bounces,
        }
    }
}

/// Advance the world by one tick using the input captured at tick start
pub fn tick(world: &mut WorldState, input: InputSnapshot, params: &PhysicsParams) -> TickReport {
    let viewport = world.viewport;

    integrate_player(&mut world.player, input, params, viewport);
    let report = integrate_bodies(&mut world.bodies, &world.player, params, viewport);

    world.frame += 1;
    report
}

fn integrate_bodies(bodies: &mut [Body], player: &Body, params: &PhysicsParams, viewport: Viewport) -> TickReport {
    #[cfg(feature = "parallel")]
    {
        if bodies.len() >= PARALLEL_BODY_THRESHOLD {
            return bodies
                .par_iter_mut()
                .map(|body| integrate_free_body(body, player, params, viewport))
                .fold(TickReport::default, TickReport::record)
                .reduce(TickReport::default, TickReport::merge);
        }
    }

    bodies
        .iter_mut()
        .map(|body| integrate_free_body(body, player, params, viewport))
        .fold(TickReport::default(), TickReport::record)
}
