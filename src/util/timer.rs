//! Single-slot cancelable timer for animation phases.
//!
//! Scheduling a new callback cancels whatever the slot held before, so a
//! phase machine never has two pending transitions racing each other. Browser
//! builds use `gloo-timers` (dropping a `Timeout` clears it); native builds
//! only record the requested delay.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

#[derive(Default)]
pub struct PhaseTimer {
    #[cfg(feature = "csr")]
    pending: Option<gloo_timers::callback::Timeout>,
    #[cfg(not(feature = "csr"))]
    pending: Option<u32>,
}

impl PhaseTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` after `delay_ms`, replacing any pending callback.
    pub fn schedule<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "csr")]
        {
            self.pending = Some(gloo_timers::callback::Timeout::new(delay_ms, callback));
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(callback);
            self.pending = Some(delay_ms);
        }
    }

    /// Drop the pending callback, if any, without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a callback was scheduled and not cancelled since. The callback
    /// may already have fired.
    #[cfg(all(test, not(feature = "csr")))]
    pub(crate) fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    #[cfg(all(test, not(feature = "csr")))]
    pub(crate) fn armed_delay(&self) -> Option<u32> {
        self.pending
    }
}
