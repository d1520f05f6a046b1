pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::BackgroundConfig;
pub use api::engine::AnimationEngine;
pub use api::types::{MeteorId, FrameReport};
pub use components::star::Star;
pub use components::meteor::Meteor;
pub use core::rng::{RandomSource, Rng};
pub use core::time::{FrameClock, FrameHandle, ManualClock};
pub use renderer::traits::{Color, Surface};
pub use renderer::recording::{DrawCommand, RecordingSurface};
pub use systems::starfield::{generate_star_field, draw_star_field};
pub use systems::meteors::{should_spawn, tick_meteors};
