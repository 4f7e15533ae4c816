//! Frame scheduling.
//!
//! The loop state is derived from the session; the scheduler only keeps the
//! next tick deadline. Each tick is `Evolve` followed by an unforced `Draw`,
//! and the next deadline is `base / speed` after the tick.

use std::time::Duration;

use tokio::time::Instant;

use crate::command::Command;
use crate::core::Session;
use crate::types::Speed;

/// Stand-in deadline when `now + interval` does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Inactive,
    Running,
    Paused,
}

impl LoopState {
    pub fn of(session: &Session) -> Self {
        if !session.is_active() {
            LoopState::Inactive
        } else if session.paused() {
            LoopState::Paused
        } else {
            LoopState::Running
        }
    }
}

/// Commands issued on every tick, in order.
pub const TICK: [Command; 2] = [Command::Evolve, Command::Draw { force: false }];

#[derive(Debug, Clone)]
pub struct Scheduler {
    base_frame_ms: u64,
    deadline: Instant,
}

impl Scheduler {
    /// Schedule the first tick one interval after `now`.
    pub fn new(base_frame_ms: u64, now: Instant, speed: Speed) -> Self {
        let mut s = Self {
            base_frame_ms,
            deadline: now,
        };
        s.schedule_next(now, speed);
        s
    }

    pub fn interval(&self, speed: Speed) -> Duration {
        Duration::from_millis(speed.frame_interval_ms(self.base_frame_ms))
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn schedule_next(&mut self, now: Instant, speed: Speed) {
        self.deadline = now
            .checked_add(self.interval(speed))
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);
    }
}
