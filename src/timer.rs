//! Single-handle debounce timer.
//!
//! Models debounce as cancel-and-reschedule on one logical deadline: every
//! trigger replaces the pending deadline, and the action fires once after a
//! quiet period of the settle duration. Driven by the event loop's tick, so
//! there is no background timer state.

use std::time::{Duration, Instant};

/// Debouncer with a single pending deadline.
#[derive(Debug)]
pub struct Debouncer {
    settle: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(settle: Duration) -> Self {
        Self { settle, deadline: None }
    }

    /// Record a triggering event. Replaces any pending deadline.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.settle);
    }

    /// Returns true (once) when the settle period has elapsed with no new
    /// triggers. Clears the pending deadline on fire.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Pending deadline, if any. Used to size the event-poll timeout.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
