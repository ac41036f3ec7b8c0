//! Frame scheduling
//!
//! The game loop asks the host to "run me again before the next frame". On the
//! web this is `requestAnimationFrame`; natively and in tests it is a simple
//! pump that fires one pending frame at a time.

/// Opaque id of a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host capability for scheduling the next tick
pub trait FrameScheduler {
    /// Register a callback for the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    /// Deregister a previously requested frame
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler driven by an explicit pump (native runner, tests)
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub(crate) next_id: i32,
    pub(crate) pending: Vec<FrameHandle>,
    /// Total frames requested over the scheduler's life
    pub requested: u32,
    /// Total frames cancelled over the scheduler's life
    pub cancelled: u32,
    /// Refuse every request, like a host that has stopped handing out frames
    pub refuse: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Pop the oldest pending frame, if any. The caller runs the frame.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        self.requested += 1;
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        if self.pending.len() < before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_and_fire() {
        let mut sched = ManualScheduler::new();
        let a = sched.request_frame();
        let b = sched.request_frame();
        assert!(a.is_some());
        assert_ne!(a, b);
        assert_eq!(sched.pending(), 2);
        assert_eq!(sched.fire(), a);
        assert_eq!(sched.fire(), b);
        assert_eq!(sched.fire(), None);
    }

    #[test]
    fn test_cancel_removes_pending() {
        let mut sched = ManualScheduler::new();
        let a = sched.request_frame().unwrap();
        sched.cancel_frame(a);
        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.cancelled, 1);

        // Cancelling an already-fired frame is a no-op
        let b = sched.request_frame().unwrap();
        sched.fire();
        sched.cancel_frame(b);
        assert_eq!(sched.cancelled, 1);
    }

    #[test]
    fn test_refusing_scheduler() {
        let mut sched = ManualScheduler {
            refuse: true,
            ..Default::default()
        };
        assert_eq!(sched.request_frame(), None);
        assert_eq!(sched.pending(), 0);
        assert_eq!(sched.requested, 0);
    }
}
