//! Debounce timer
//!
//! Collapses a burst of trigger events into one action fired after a
//! quiet period. Each trigger cancels and reschedules the pending
//! deadline; the owner polls [`Debouncer::fire_ready`] from its event
//! loop. Also used one-shot for the carousel's initial settle delay.

use std::time::{Duration, Instant};

/// Stateful quiet-period timer with cancel-and-reschedule semantics
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub const fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Record a trigger now, cancelling any pending deadline
    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    /// Record a trigger at the given instant
    pub fn trigger_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Drop any pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a trigger is waiting for its quiet period to elapse
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the quiet period has elapsed since the last trigger
    ///
    /// Returns true at most once per burst; the deadline is cleared when
    /// it fires.
    pub fn fire_ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_quiet_period() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let start = Instant::now();

        debouncer.trigger_at(start);
        assert!(!debouncer.fire_ready(start + Duration::from_millis(100)));
        assert!(debouncer.fire_ready(start + Duration::from_millis(250)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_burst_collapses_to_one_fire() {
        let mut debouncer = Debouncer::new(Duration::from_millis(250));
        let start = Instant::now();

        for i in 0..5 {
            debouncer.trigger_at(start + Duration::from_millis(i * 50));
        }

        // Quiet period restarts from the last trigger
        assert!(!debouncer.fire_ready(start + Duration::from_millis(300)));
        assert!(debouncer.fire_ready(start + Duration::from_millis(450)));
        assert!(!debouncer.fire_ready(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_cancel_discards_pending_fire() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        let start = Instant::now();

        debouncer.trigger_at(start);
        debouncer.cancel();
        assert!(!debouncer.fire_ready(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_idle_never_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        assert!(!debouncer.fire_ready(Instant::now()));
        assert!(!debouncer.is_pending());
    }
}
