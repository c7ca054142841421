//! Trailing-edge debounce built on gloo `Timeout`.

use gloo_timers::callback::Timeout;
use sandpit_core::QUIET_WINDOW_MS;

/// One pending trailing-edge flush.
///
/// Scheduling again before the quiet window elapses drops the previous
/// timer (cancel-on-drop), so within a burst of edits only the last
/// scheduled callback fires - no leading call, no periodic flush.
pub struct DebouncedFlush {
    quiet_ms: u32,
    pending: Option<Timeout>,
}

impl DebouncedFlush {
    /// Debounce with the standard quiet window.
    pub fn new() -> Self {
        Self::with_quiet_window(QUIET_WINDOW_MS)
    }

    pub fn with_quiet_window(quiet_ms: u32) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Arm (or re-arm) the timer. Any previously pending callback is
    /// cancelled and `flush` becomes the sole payload.
    pub fn schedule(&mut self, flush: impl FnOnce() + 'static) {
        self.pending = Some(Timeout::new(self.quiet_ms, flush));
    }

    /// Drop the pending callback, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for DebouncedFlush {
    fn default() -> Self {
        Self::new()
    }
}
