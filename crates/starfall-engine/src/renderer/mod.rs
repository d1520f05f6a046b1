pub mod traits;
pub mod recording;

// Re-export key types for convenient access
pub use traits::{Color, Surface};
pub use recording::{DrawCommand, RecordingSurface};
