//! Frame scheduling seam
//!
//! The session asks for "one more frame" and later receives a callback
//! carrying the handle it was given. Cancelling a handle guarantees that
//! frame is never delivered.

use crate::core::error::EngineError;

/// Opaque id of a scheduled frame callback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(i32);

impl FrameHandle {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> i32 {
        self.0
    }
}

pub trait FrameScheduler {
    /// Request a single future frame callback
    fn schedule(&mut self) -> Result<FrameHandle, EngineError>;

    /// Drop a requested frame; unknown or already-delivered handles are ignored
    fn cancel(&mut self, handle: FrameHandle);
}

/// Headless fixed-timestep scheduler.
///
/// Time is fed in with `advance`; each full `step_ms` of accumulated time
/// releases the pending frame through `take_due`. At most one frame is
/// pending at a time, matching the one-callback-per-refresh model.
#[derive(Clone, Debug)]
pub struct FixedStepScheduler {
    step_ms: f64,
    accumulator_ms: f64,
    next_id: i32,
    pending: Option<FrameHandle>,
    cancelled: u32,
}

impl FixedStepScheduler {
    /// Default step: one 60 Hz display refresh
    pub const DEFAULT_STEP_MS: f64 = 1000.0 / 60.0;

    pub fn new(step_ms: f64) -> Self {
        Self {
            step_ms: if step_ms > 0.0 { step_ms } else { Self::DEFAULT_STEP_MS },
            accumulator_ms: 0.0,
            next_id: 1,
            pending: None,
            cancelled: 0,
        }
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Frames cancelled over the scheduler's lifetime
    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }

    pub fn advance(&mut self, elapsed_ms: f64) {
        if elapsed_ms > 0.0 {
            self.accumulator_ms += elapsed_ms;
        }
    }

    /// Release the pending frame if a full step has accumulated
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        if self.pending.is_none() || self.accumulator_ms < self.step_ms {
            return None;
        }
        self.accumulator_ms -= self.step_ms;
        self.pending.take()
    }

    /// Release the pending frame immediately, ignoring the clock
    pub fn take_now(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl Default for FixedStepScheduler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP_MS)
    }
}

impl FrameScheduler for FixedStepScheduler {
    fn schedule(&mut self) -> Result<FrameHandle, EngineError> {
        if self.pending.is_some() {
            return Err(EngineError::Scheduler("a frame is already pending".to_string()));
        }
        let handle = FrameHandle::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some(handle);
        Ok(handle)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
