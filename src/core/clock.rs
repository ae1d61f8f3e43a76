use chrono::{Local, NaiveDateTime};
use std::thread;
use std::time::Duration;

#[cfg(test)]
use chrono::TimeDelta;
#[cfg(test)]
use std::cell::Cell;

/// Local wall-clock abstraction used by the frame loop and the midnight
/// scheduler.
///
/// - now(): current local date and time (no time zone attached)
/// - sleep(): waits for the given duration (implementations may simulate)
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    fn sleep(&self, d: Duration);
}

/// Real clock backed by `chrono::Local` and `thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, d: Duration) {
        if d.is_zero() {
            return;
        }
        thread::sleep(d);
    }
}

/// Deterministic clock whose time only moves when told to.
///
/// sleep(d) advances the clock by d without actually sleeping.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<NaiveDateTime>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, d: Duration) {
        let delta = TimeDelta::from_std(d).unwrap_or(TimeDelta::zero());
        self.now.set(self.now.get() + delta);
    }

    pub fn set(&self, t: NaiveDateTime) {
        self.now.set(t);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }

    fn sleep(&self, d: Duration) {
        self.advance(d);
    }
}
