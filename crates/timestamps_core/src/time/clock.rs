//! Time source seam for operations that read "now".

use super::ZonedTime;
use chrono::{DateTime, Local, TimeDelta, TimeZone};
use std::cell::Cell;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> ZonedTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> ZonedTime {
        (**self).now()
    }
}

/// Process wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ZonedTime {
        Local::now().fixed_offset()
    }
}

/// Clock that only moves when told to.
///
/// Used by tests and by hosts that replay recorded time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Cell<ZonedTime>,
}

impl ManualClock {
    pub fn new<Tz: TimeZone>(start: DateTime<Tz>) -> Self {
        Self {
            current: Cell::new(start.fixed_offset()),
        }
    }

    pub fn set<Tz: TimeZone>(&self, time: DateTime<Tz>) {
        self.current.set(time.fixed_offset());
    }

    /// Moves the clock by `delta` (which may be negative).
    ///
    /// A step past the representable range leaves the clock unchanged.
    pub fn advance(&self, delta: TimeDelta) {
        if let Some(next) = self.current.get().checked_add_signed(delta) {
            self.current.set(next);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> ZonedTime {
        self.current.get()
    }
}
