use glam::DVec2;

use crate::api::config::BackgroundConfig;
use crate::api::types::{FrameReport, MeteorId};
use crate::components::meteor::Meteor;
use crate::components::star::Star;
use crate::core::rng::{RandomSource, Rng};
use crate::core::time::{FrameClock, FrameHandle};
use crate::renderer::traits::Surface;
use crate::systems::meteors::{should_spawn, tick_meteors};
use crate::systems::starfield::{draw_star_field, generate_star_field};

#[derive(Debug, Clone, Copy, PartialEq)]
enum EngineState {
    Stopped,
    Running { pending: Option<FrameHandle> },
}

/// Star field + meteor shower, driven one frame at a time by a host frame clock.
///
/// The engine owns its drawing surface, frame clock and random source. The
/// host calls `start` once the viewport is known, forwards every frame
/// callback to `tick`, forwards viewport changes to `on_resize`, and calls
/// `stop` on teardown.
pub struct AnimationEngine<S: Surface, C: FrameClock, R: RandomSource = Rng> {
    config: BackgroundConfig,
    surface: S,
    clock: C,
    rng: R,
    size: DVec2,
    stars: Vec<Star>,
    meteors: Vec<Meteor>,
    last_spawn_ms: f64,
    next_id: u32,
    state: EngineState,
}

impl<S: Surface, C: FrameClock, R: RandomSource> AnimationEngine<S, C, R> {
    pub fn new(config: BackgroundConfig, surface: S, clock: C, rng: R) -> Self {
        let star_count = config.star_count;
        let max_meteors = config.max_meteors;
        Self {
            config,
            surface,
            clock,
            rng,
            size: DVec2::ZERO,
            stars: Vec::with_capacity(star_count),
            meteors: Vec::with_capacity(max_meteors),
            last_spawn_ms: 0.0,
            next_id: 1,
            state: EngineState::Stopped,
        }
    }

    /// Size the surface, seed the star field, clear meteors and request the first frame.
    /// Restarts cleanly if already running.
    pub fn start(&mut self, width: f64, height: f64) {
        if let EngineState::Running { pending: Some(handle) } = self.state {
            self.clock.cancel_frame(handle);
        }
        self.apply_size(width, height);
        self.meteors.clear();
        self.last_spawn_ms = 0.0;
        let pending = self.clock.request_frame();
        self.state = EngineState::Running { pending };
        log::info!("starfall: started at {}x{} with {} stars", width, height, self.stars.len());
    }

    /// Adopt a new viewport size and regenerate the star field for it.
    /// Meteors in flight keep going against the new bounds.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.apply_size(width, height);
        log::debug!("starfall: resized to {}x{}, {} meteors kept", width, height, self.meteors.len());
    }

    /// Run one frame: clear, stars, spawn gate, meteor pass, then schedule the next frame.
    /// Does nothing once stopped.
    pub fn tick(&mut self, now_ms: f64) -> FrameReport {
        let mut report = FrameReport::default();
        if self.state == EngineState::Stopped {
            return report;
        }

        self.surface.clear_rect(0.0, 0.0, self.size.x, self.size.y);
        report.stars_drawn = draw_star_field(&self.stars, &mut self.surface, self.config.star_color);

        if should_spawn(now_ms, self.last_spawn_ms, self.meteors.len(), &self.config) {
            let id = self.next_id();
            let meteor = Meteor::spawn(id, &mut self.rng, self.size.x, &self.config);
            log::trace!("meteor {:?} spawned at x={:.1}", id, meteor.pos.x);
            self.meteors.push(meteor);
            self.last_spawn_ms = now_ms;
            report.spawned = Some(id);
        }

        report.meteors_drawn = tick_meteors(
            &mut self.meteors,
            self.size,
            &mut self.surface,
            &self.config,
            &mut report.despawned,
        );

        let pending = self.clock.request_frame();
        self.state = EngineState::Running { pending };
        report
    }

    /// Cancel the pending frame. No-op if never started or already stopped.
    pub fn stop(&mut self) {
        if let EngineState::Running { pending } = std::mem::replace(&mut self.state, EngineState::Stopped) {
            if let Some(handle) = pending {
                self.clock.cancel_frame(handle);
            }
            log::info!("starfall: stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.state != EngineState::Stopped
    }

    /// Current surface size as (width, height).
    pub fn size(&self) -> (f64, f64) {
        (self.size.x, self.size.y)
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Active meteors in creation order.
    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    pub fn last_spawn_ms(&self) -> f64 {
        self.last_spawn_ms
    }

    pub fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn apply_size(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(width, height);
        self.surface.resize(width, height);
        generate_star_field(&mut self.stars, &mut self.rng, width, height, &self.config);
    }

    fn next_id(&mut self) -> MeteorId {
        let id = MeteorId(self.next_id);
        self.next_id += 1;
        id
    }
}
