//! Autoplay timer driven by host frame time.

use std::time::Duration;

use tracing::trace;

/// Parameters captured when the timer is acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub interval: Duration,
    pub time_step: Duration,
    pub panel_count: usize,
}

/// Fixed-period tick source. Dropping it cancels every pending tick.
#[derive(Debug)]
pub struct Ticker {
    schedule: Schedule,
    pending: Duration,
}

impl Ticker {
    pub fn start(schedule: Schedule) -> Self {
        trace!(?schedule, "autoplay timer acquired");
        Self {
            schedule,
            pending: Duration::ZERO,
        }
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Adds `frame` worth of time and returns how many ticks are now due.
    pub fn poll(&mut self, frame: Duration) -> u32 {
        let step = self.schedule.time_step;
        if step.is_zero() {
            return 0;
        }
        self.pending += frame;
        let mut due = 0;
        while self.pending >= step {
            self.pending -= step;
            due += 1;
        }
        due
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        trace!(schedule = ?self.schedule, "autoplay timer released");
    }
}
