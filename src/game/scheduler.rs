//! Frame scheduling for the arcade loop.
//!
//! The host's refresh timer asks the engine for its pending frame and hands
//! the handle back to `tick`. Only the handle that is currently pending can
//! fire; cancelling clears it, so a frame requested before a reset can never
//! run against the state that reset produced.

/// Identifies one scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Holds at most one pending frame.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the next frame, replacing any pending one.
    pub fn request(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    /// Drop the pending frame. Returns the handle that was cancelled.
    pub fn cancel(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Consume the pending frame if `handle` is it.
    ///
    /// Returns false for cancelled, superseded, or already-fired handles.
    pub fn fire(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_then_fire() {
        let mut scheduler = FrameScheduler::new();
        let handle = scheduler.request();
        assert_eq!(scheduler.pending(), Some(handle));
        assert!(scheduler.fire(handle));
        assert!(scheduler.pending().is_none());
        // Second fire of the same handle is stale
        assert!(!scheduler.fire(handle));
    }

    #[test]
    fn test_cancelled_handle_never_fires() {
        let mut scheduler = FrameScheduler::new();
        let handle = scheduler.request();
        assert_eq!(scheduler.cancel(), Some(handle));
        assert!(!scheduler.fire(handle));
    }

    #[test]
    fn test_superseded_handle_is_stale() {
        let mut scheduler = FrameScheduler::new();
        let old = scheduler.request();
        let new = scheduler.request();
        assert_ne!(old, new);
        assert!(!scheduler.fire(old));
        assert!(scheduler.fire(new));
    }

    #[test]
    fn test_handles_are_monotonic() {
        let mut scheduler = FrameScheduler::new();
        let a = scheduler.request();
        scheduler.cancel();
        let b = scheduler.request();
        assert!(b.id() > a.id());
    }
}
