use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::systems::physics::TickReport;

/// Timings and counters for the most recent frame (zeros when perf is off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) tick_ms: f64,
    pub(super) render_ms: f64,
    pub(super) pushes: u32,
    pub(super) bounces: u32,
    pub(super) body_count: u32,
    pub(super) frames: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_tick(&mut self, report: TickReport, body_count: usize, frames: u64) {
        self.pushes = report.pushes;
        self.bounces = report.bounces;
        self.body_count = body_count as u32;
        self.frames = frames;
    }

    pub(crate) fn record_timings(&mut self, tick_ms: f64, render_ms: f64, frame_ms: f64) {
        self.tick_ms = tick_ms;
        self.render_ms = render_ms;
        self.frame_ms = frame_ms;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn pushes(&self) -> u32 { self.pushes }
    #[wasm_bindgen(getter)]
    pub fn bounces(&self) -> u32 { self.bounces }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u64 { self.frames }
}
