use std::time::Duration;
use std::time::Instant;

/// How often a running simulation steps, unless configured otherwise.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(300);

/// A periodic trigger that the event loop polls.
///
/// The clock only knows when its next tick is due. Nothing fires on its own: the owner asks
/// [`IntervalClock::fire`] whether a tick is due, and uses [`IntervalClock::timeout`] to know
/// how long it may block waiting for input in the meantime.
#[derive(Debug, Clone)]
pub struct IntervalClock {
    interval: Duration,

    /// `None` while the clock is stopped
    next: Option<Instant>,
}

impl Default for IntervalClock {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_INTERVAL)
    }
}

impl IntervalClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the clock so it first fires one interval after `now`. Starting an armed clock does
    /// nothing, so ticks never get scheduled twice.
    pub fn start(&mut self, now: Instant) {
        if self.next.is_none() {
            self.next = Some(now + self.interval);
        }
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Returns whether a tick is due at `now`, and if so schedules the next one.
    ///
    /// Ticks missed by more than one interval are dropped rather than fired in a burst.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(due) = self.next else {
            return false;
        };

        if now < due {
            return false;
        }

        let next = due + self.interval;
        self.next = Some(if next <= now { now + self.interval } else { next });

        true
    }

    /// How long until the next tick, or `idle` if the clock is stopped.
    pub fn timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.next {
            Some(due) => due.saturating_duration_since(now),
            None => idle,
        }
    }
}
