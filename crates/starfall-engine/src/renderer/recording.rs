use super::traits::{Color, Surface};

/// One recorded call on a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width: f64, height: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    Save,
    Restore,
    GlobalAlpha(f64),
    FillStyle(Color),
    StrokeStyle(Color),
    LineWidth(f64),
    Shadow { blur: f64, color: Color },
    BeginPath,
    Arc { x: f64, y: f64, radius: f64 },
    Fill,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
}

impl DrawCommand {
    /// Whether this call puts pixels on the surface (as opposed to setting state).
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            DrawCommand::ClearRect { .. } | DrawCommand::Arc { .. } | DrawCommand::Fill | DrawCommand::Stroke
        )
    }
}

/// Surface that records every call instead of rasterizing.
/// Used by headless hosts and by tests to inspect what a frame drew.
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    width: f64,
    height: f64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
            width: 0.0,
            height: 0.0,
        }
    }

    /// All commands recorded since the last `clear`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands matching a predicate.
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Forget recorded commands (the surface size is kept).
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Size set by the most recent `resize`.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_shadow(&mut self, blur: f64, color: Color) {
        self.commands.push(DrawCommand::Shadow { blur, color });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, _start_angle: f64, _end_angle: f64) {
        self.commands.push(DrawCommand::Arc { x, y, radius });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
