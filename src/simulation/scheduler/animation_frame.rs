use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::error::{describe_js, EngineError};

use super::{FrameHandle, FrameScheduler};

/// `requestAnimationFrame` scheduler.
///
/// Every scheduled frame invokes the same callback; the callback is kept
/// alive for as long as the scheduler is.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window, callback: Closure<dyn FnMut(f64)>) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn schedule(&mut self) -> Result<FrameHandle, EngineError> {
        self.window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map(FrameHandle::new)
            .map_err(|err| EngineError::Scheduler(describe_js(&err)))
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.raw()) {
            log::warn!("cancelAnimationFrame({}) failed: {}", handle.raw(), describe_js(&err));
        }
    }
}
