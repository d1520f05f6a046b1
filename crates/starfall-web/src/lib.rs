pub mod canvas;
pub mod clock;
pub mod runner;

pub use canvas::CanvasSurface;
pub use clock::AnimationFrameClock;
pub use runner::BackgroundRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use starfall_engine::BackgroundConfig;

thread_local! {
    static RUNNER: RefCell<Option<BackgroundRunner>> = RefCell::new(None);
}

/// Run `f` against the mounted runner. `None` if nothing is mounted.
fn with_runner<R>(f: impl FnOnce(&mut BackgroundRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn on_frame(now_ms: f64) {
    with_runner(|r| r.tick(now_ms));
}

fn mount(canvas_id: &str, config: BackgroundConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // Drop outside the borrow: Drop cancels the old frame and detaches its listeners.
    let previous = RUNNER.with(|cell| cell.borrow_mut().take());
    drop(previous);

    let mut runner = BackgroundRunner::new(canvas_id, config, on_frame)?;
    runner.listen("resize", |_| {
        with_runner(|r| r.resize_to_viewport());
    })?;
    runner.listen("beforeunload", |_| {
        with_runner(|r| r.stop());
    })?;
    runner.start();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("starfall: mounted on #{}", canvas_id);
    Ok(())
}

/// Mount the background on the `<canvas>` with the given id, using default settings.
#[wasm_bindgen]
pub fn background_start(canvas_id: &str) -> Result<(), JsValue> {
    mount(canvas_id, BackgroundConfig::default())
}

/// Mount with settings from a JSON object; missing fields keep their defaults.
#[wasm_bindgen]
pub fn background_start_with_config(canvas_id: &str, config_json: &str) -> Result<(), JsValue> {
    let config = BackgroundConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&format!("invalid background config: {}", e)))?;
    mount(canvas_id, config)
}

#[wasm_bindgen]
pub fn background_resize(width: f64, height: f64) {
    if with_runner(|r| r.resize(width, height)).is_none() {
        log::warn!("background_resize called before background_start");
    }
}

/// Stop the animation and detach from the page. Safe to call at any time.
#[wasm_bindgen]
pub fn background_stop() {
    let runner = RUNNER.with(|cell| cell.borrow_mut().take());
    if runner.is_none() {
        log::debug!("background_stop: nothing mounted");
    }
    drop(runner);
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn background_is_running() -> bool {
    with_runner(|r| r.is_running()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn background_meteor_count() -> u32 {
    with_runner(|r| r.meteor_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn background_star_count() -> u32 {
    with_runner(|r| r.star_count()).unwrap_or(0)
}
