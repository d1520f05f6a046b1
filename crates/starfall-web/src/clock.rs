use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use starfall_engine::{FrameClock, FrameHandle};

/// `FrameClock` backed by `requestAnimationFrame`.
///
/// Owns the JS callback. Dropping the clock frees it, so the pending frame
/// must be cancelled first (the engine does this in `stop`).
pub struct AnimationFrameClock {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrameClock {
    /// `on_frame` receives the high-resolution frame timestamp in milliseconds.
    pub fn new(on_frame: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no global window")?;
        let callback = Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>);
        Ok(Self { window, callback })
    }
}

impl FrameClock for AnimationFrameClock {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        match self.window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(err) => {
                log::error!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle.0, err);
        }
    }
}
