use std::time::{Duration, Instant};

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Schedule {
    period: Duration,
    deadline: Instant,
}

/// Owned handle to the single repeating trigger that drives playback.
///
/// At most one schedule exists at a time: arming replaces whatever was armed
/// before, and dropping the handle cancels it.
#[derive(Debug, Default)]
pub struct RepeatingTimer {
    schedule: Option<Schedule>,
}

impl RepeatingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to first fire one `period` after `now`.
    pub fn arm(&mut self, period: Duration, now: Instant) {
        if let Some(previous) = self.schedule.take() {
            trace!(period = ?previous.period, "replacing armed timer");
        }
        self.schedule = Some(Schedule {
            period,
            deadline: now + period,
        });
    }

    /// Disarms the timer. Returns whether it was armed.
    pub fn cancel(&mut self) -> bool {
        self.schedule.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.schedule.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.schedule.map(|s| s.deadline)
    }

    /// Fires at most once if the deadline has passed, then schedules the
    /// next deadline. A scheduler that fell more than one period behind
    /// skips the missed beats instead of bursting through them.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        if now < schedule.deadline {
            return false;
        }

        schedule.deadline += schedule.period;
        if schedule.deadline <= now {
            schedule.deadline = now + schedule.period;
        }
        true
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        if self.cancel() {
            trace!("timer cancelled on drop");
        }
    }
}
