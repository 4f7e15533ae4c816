//! Minimum-interval gate for key events.
//!
//! Terminals deliver a burst of presses while a key is held. The gate accepts
//! one event and then rejects everything until `cooldown` has elapsed on the
//! monotonic clock. Callers pass the current instant in, which keeps the gate
//! free of timers and trivially testable.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct DebounceGate {
    cooldown: Duration,
    last_accepted: Option<Instant>,
}

impl DebounceGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted: None,
        }
    }

    /// Accept an event at `now` if the cooldown since the last accepted one has passed.
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.cooldown {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }

    /// Forget the last accepted event so the next one passes immediately.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
