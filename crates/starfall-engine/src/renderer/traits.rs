//! Drawing surface contract.
//!
//! The engine never touches a canvas directly. It issues the same calls a
//! Canvas2D context understands, through `Surface`. The browser host
//! implements it over `CanvasRenderingContext2d`; headless hosts and tests
//! use `RecordingSurface`.

use serde::{Deserialize, Serialize};

/// RGBA color. Channels are 0-255, alpha is 0.0-1.0 (CSS convention).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string accepted by `fillStyle` / `strokeStyle` / `shadowColor`.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// The 2D drawing calls the engine makes on its host-provided surface.
///
/// Mirrors the subset of the Canvas2D API used by the background:
/// clear, filled arcs for stars, stroked lines for meteors, and
/// save/restore around each meteor to scope alpha and shadow changes.
pub trait Surface {
    /// Resize the backing store to the new viewport size (in pixels).
    fn resize(&mut self, width: f64, height: f64);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn save(&mut self);
    fn restore(&mut self);

    fn set_global_alpha(&mut self, alpha: f64);
    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    /// Glow around subsequent strokes: blur radius plus shadow color.
    fn set_shadow(&mut self, blur: f64, color: Color);

    fn begin_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}
