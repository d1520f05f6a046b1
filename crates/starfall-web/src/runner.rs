use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use starfall_engine::{AnimationEngine, BackgroundConfig, Rng};

use crate::canvas::CanvasSurface;
use crate::clock::AnimationFrameClock;

type Listener = Closure<dyn FnMut(Event)>;

/// Binds the engine to a canvas, the animation-frame clock and window events.
///
/// The page keeps a single runner in a `thread_local!` (see `lib.rs`); the
/// frame callback and the window listeners re-enter it through that slot.
pub struct BackgroundRunner {
    engine: AnimationEngine<CanvasSurface, AnimationFrameClock>,
    window: Window,
    listeners: Vec<(&'static str, Listener)>,
}

impl BackgroundRunner {
    pub fn new(
        canvas_id: &str,
        config: BackgroundConfig,
        on_frame: impl FnMut(f64) + 'static,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no global window")?;
        let surface = CanvasSurface::from_element_id(canvas_id)?;
        let clock = AnimationFrameClock::new(on_frame)?;
        let rng = Rng::new(random_seed());

        Ok(Self {
            engine: AnimationEngine::new(config, surface, clock, rng),
            window,
            listeners: Vec::new(),
        })
    }

    /// Attach a window event listener that lives as long as the runner.
    pub fn listen(&mut self, event: &'static str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
        let closure: Listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        self.window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.listeners.push((event, closure));
        Ok(())
    }

    /// Start (or restart) at the current viewport size.
    pub fn start(&mut self) {
        let (width, height) = self.viewport_size();
        self.engine.start(width, height);
    }

    /// Run one frame. Called from the animation-frame callback.
    pub fn tick(&mut self, now_ms: f64) {
        self.engine.tick(now_ms);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.engine.on_resize(width, height);
    }

    pub fn resize_to_viewport(&mut self) {
        let (width, height) = self.viewport_size();
        self.resize(width, height);
    }

    pub fn stop(&mut self) {
        self.engine.stop();
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn meteor_count(&self) -> u32 {
        self.engine.meteors().len() as u32
    }

    pub fn star_count(&self) -> u32 {
        self.engine.stars().len() as u32
    }

    fn viewport_size(&self) -> (f64, f64) {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width, height)
    }
}

impl Drop for BackgroundRunner {
    fn drop(&mut self) {
        // Cancel before the clock's closure is freed.
        self.engine.stop();
        for (event, closure) in self.listeners.drain(..) {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to detach '{}' listener: {:?}", event, err);
            }
        }
    }
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
