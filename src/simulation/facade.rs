//! Browser driver exported to JS
//!
//! `Game` wires a `GameSession` to a `<canvas>`, `requestAnimationFrame`
//! and window keyboard/resize events. JS closures hold only a `Weak`
//! reference to the driver, so dropping the `Game` tears everything down.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

use crate::core::error::{describe_js, EngineError};
use crate::domain::GameConfig;
use crate::systems::render::CanvasSurface;

use super::perf_stats::PerfStats;
use super::{AnimationFrameScheduler, GameSession};

/// Window listeners attached while playing
struct Listeners {
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    keyup: Closure<dyn FnMut(KeyboardEvent)>,
    resize: Closure<dyn FnMut()>,
}

struct Driver {
    session: GameSession,
    window: Window,
    canvas: HtmlCanvasElement,
    surface: Option<CanvasSurface>,
    scheduler: AnimationFrameScheduler,
    listeners: Option<Listeners>,
    this: Weak<RefCell<Driver>>,
}

impl Driver {
    fn frame(&mut self) {
        let Some(handle) = self.session.pending_frame() else {
            return;
        };
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if let Err(err) = self.session.on_frame(handle, surface, &mut self.scheduler) {
            log::error!("frame failed: {}", err);
            // Session already fell back to Idle; release the window hooks too
            self.stop();
        }
    }

    fn start(&mut self) -> bool {
        if self.session.is_playing() {
            return true;
        }

        let surface = match CanvasSurface::from_canvas(self.canvas.clone()) {
            Ok(surface) => surface,
            Err(err) => {
                log::warn!("game not started: {}", err);
                return false;
            }
        };
        surface.sync_size();

        if let Err(err) = self.session.start(Some(&surface), &mut self.scheduler) {
            log::warn!("game not started: {}", err);
            return false;
        }
        self.surface = Some(surface);

        // Listeners left behind by an aborted run must leave the window first
        self.release_listeners();
        match self.attach_listeners() {
            Ok(listeners) => self.listeners = Some(listeners),
            Err(err) => {
                log::error!("failed to attach input listeners: {}", err);
                self.stop();
                return false;
            }
        }
        true
    }

    fn stop(&mut self) {
        self.session.exit(&mut self.scheduler);
        self.release_listeners();
        self.surface = None;
    }

    fn release_listeners(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            self.detach_listeners(&listeners);
        }
    }

    fn resize(&mut self) {
        if let Some(surface) = &self.surface {
            let viewport = surface.sync_size();
            self.session.resize(viewport);
        }
    }

    fn attach_listeners(&self) -> Result<Listeners, EngineError> {
        let key_listener = |pressed: bool| {
            let weak = self.this.clone();
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if let Some(driver) = weak.upgrade() {
                    let key = event.key();
                    let mut driver = driver.borrow_mut();
                    if pressed {
                        driver.session.key_down(&key);
                    } else {
                        driver.session.key_up(&key);
                    }
                }
            })
        };

        let weak = self.this.clone();
        let listeners = Listeners {
            keydown: key_listener(true),
            keyup: key_listener(false),
            resize: Closure::<dyn FnMut()>::new(move || {
                if let Some(driver) = weak.upgrade() {
                    driver.borrow_mut().resize();
                }
            }),
        };

        let add = |event: &str, callback: &js_sys::Function| {
            self.window
                .add_event_listener_with_callback(event, callback)
                .map_err(|err| EngineError::EventListener(format!("addEventListener({}): {}", event, describe_js(&err))))
        };
        add("keydown", listeners.keydown.as_ref().unchecked_ref())?;
        add("keyup", listeners.keyup.as_ref().unchecked_ref())?;
        add("resize", listeners.resize.as_ref().unchecked_ref())?;

        Ok(listeners)
    }

    fn detach_listeners(&self, listeners: &Listeners) {
        let pairs: [(&str, &js_sys::Function); 3] = [
            ("keydown", listeners.keydown.as_ref().unchecked_ref()),
            ("keyup", listeners.keyup.as_ref().unchecked_ref()),
            ("resize", listeners.resize.as_ref().unchecked_ref()),
        ];
        for (event, callback) in pairs {
            if let Err(err) = self.window.remove_event_listener_with_callback(event, callback) {
                log::warn!("removeEventListener({}) failed: {}", event, describe_js(&err));
            }
        }
    }
}

#[wasm_bindgen]
pub struct Game {
    driver: Rc<RefCell<Driver>>,
}

#[wasm_bindgen]
impl Game {
    /// Create a game bound to `canvas`. `config_json` overrides the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<Game, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json)?,
            None => GameConfig::default(),
        };
        let window = web_sys::window()
            .ok_or_else(|| EngineError::SurfaceUnavailable("no global window".to_string()))?;

        let driver = Rc::new_cyclic(|this: &Weak<RefCell<Driver>>| {
            let frame_target = this.clone();
            let callback = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                if let Some(driver) = frame_target.upgrade() {
                    driver.borrow_mut().frame();
                }
            });
            RefCell::new(Driver {
                session: GameSession::new(config),
                window: window.clone(),
                canvas,
                surface: None,
                scheduler: AnimationFrameScheduler::new(window, callback),
                listeners: None,
                this: this.clone(),
            })
        });

        Ok(Game { driver })
    }

    /// Enter Playing. Returns false when the canvas has no 2D context.
    pub fn start(&self) -> bool {
        self.driver.borrow_mut().start()
    }

    /// Back to Idle: cancels the animation frame and detaches listeners
    pub fn exit(&self) {
        self.driver.borrow_mut().stop();
    }

    #[wasm_bindgen(getter)]
    pub fn is_playing(&self) -> bool {
        self.driver.borrow().session.is_playing()
    }

    /// Forward a key press from the host (same effect as a window keydown)
    pub fn key_down(&self, key: &str) -> bool {
        self.driver.borrow_mut().session.key_down(key)
    }

    pub fn key_up(&self, key: &str) -> bool {
        self.driver.borrow_mut().session.key_up(key)
    }

    /// Re-read the canvas layout size (container resized without a window resize)
    pub fn resize(&self) {
        self.driver.borrow_mut().resize();
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&self, enabled: bool) {
        self.driver.borrow_mut().session.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.driver.borrow().session.get_perf_stats()
    }

    /// Current world as JSON (`null` while idle)
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        let driver = self.driver.borrow();
        serde_json::to_string(&driver.session.world())
            .map_err(|err| JsValue::from(EngineError::from(err)))
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        Ok(self.driver.borrow().session.config().to_json()?)
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        if let Ok(mut driver) = self.driver.try_borrow_mut() {
            driver.stop();
        }
    }
}
