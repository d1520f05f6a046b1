/// Opaque id of a scheduled frame callback (the value `requestAnimationFrame` returns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Per-frame scheduling primitive provided by the host.
///
/// Each call to `request_frame` asks the host to invoke the engine's `tick`
/// once before the next display refresh. The engine requests exactly one
/// frame per tick and cancels the outstanding one on stop.
pub trait FrameClock {
    /// Schedule the next frame. Returns `None` when the host could not schedule one.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a previously scheduled frame.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Frame clock for headless hosts and tests.
/// Hands out sequential handles and keeps a log of what was requested and cancelled.
#[derive(Debug, Default)]
pub struct ManualClock {
    next: i32,
    pending: Option<FrameHandle>,
    requested: u32,
    cancelled: Vec<FrameHandle>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame currently waiting to fire, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Consume the pending frame, as the host does right before invoking `tick`.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Total number of frames requested so far.
    pub fn requested(&self) -> u32 {
        self.requested
    }

    /// Handles passed to `cancel_frame`, in call order.
    pub fn cancelled(&self) -> &[FrameHandle] {
        &self.cancelled
    }
}

impl FrameClock for ManualClock {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending = Some(handle);
        self.requested += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_hands_out_sequential_handles() {
        let mut clock = ManualClock::new();
        let a = clock.request_frame().unwrap();
        let b = clock.request_frame().unwrap();
        assert_eq!(a, FrameHandle(1));
        assert_eq!(b, FrameHandle(2));
        assert_eq!(clock.requested(), 2);
        assert_eq!(clock.pending(), Some(b));
    }

    #[test]
    fn cancel_clears_pending() {
        let mut clock = ManualClock::new();
        let h = clock.request_frame().unwrap();
        clock.cancel_frame(h);
        assert_eq!(clock.pending(), None);
        assert_eq!(clock.cancelled(), &[h]);
    }

    #[test]
    fn cancel_stale_handle_keeps_pending() {
        let mut clock = ManualClock::new();
        let old = clock.request_frame().unwrap();
        let current = clock.request_frame().unwrap();
        clock.cancel_frame(old);
        assert_eq!(clock.pending(), Some(current));
    }

    #[test]
    fn fire_consumes_pending() {
        let mut clock = ManualClock::new();
        clock.request_frame();
        assert!(clock.fire().is_some());
        assert!(clock.fire().is_none());
    }
}
