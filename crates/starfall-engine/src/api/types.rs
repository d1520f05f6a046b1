/// Unique identifier for a meteor, stable for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeteorId(pub u32);

/// What a single `tick` did. Empty when the engine is stopped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Meteor spawned this frame, if the spawn gate opened.
    pub spawned: Option<MeteorId>,
    /// Meteors removed this frame (faded out or left the surface).
    pub despawned: Vec<MeteorId>,
    pub stars_drawn: usize,
    pub meteors_drawn: usize,
}

impl FrameReport {
    /// Whether the frame did anything at all.
    pub fn is_empty(&self) -> bool {
        self.spawned.is_none()
            && self.despawned.is_empty()
            && self.stars_drawn == 0
            && self.meteors_drawn == 0
    }
}
