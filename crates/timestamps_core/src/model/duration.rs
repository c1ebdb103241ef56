//! Started/ended pair for records with a lifetime window.
//!
//! # Responsibility
//! - Hold `started_at`/`ended_at` and their layout accessors.
//! - Answer derived queries: started, ended, elapsed length.
//!
//! # Invariants
//! - `ended_at` may precede `started_at`; nothing validates the order.
//! - `load_default_timestamps` never touches `ended_at`.

use super::accessors::null_time_accessors;
use crate::time::{Clock, NullTime, SystemClock};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Embeddable started/ended timestamp pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Duration {
    pub started_at: NullTime,
    pub ended_at: NullTime,
}

null_time_accessors!(Duration { started_at, ended_at });

impl Duration {
    /// Creates a duration with both ends unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `started_at` to now when it is unset.
    pub fn load_default_timestamps(&mut self) {
        self.load_default_timestamps_with(&SystemClock);
    }

    pub fn load_default_timestamps_with(&mut self, clock: &impl Clock) {
        if self.started_at.is_null() {
            self.started_at = NullTime::now_from(clock);
        }
    }

    pub fn touch_start_timestamps(&mut self) {
        self.touch_start_timestamps_with(&SystemClock);
    }

    pub fn touch_start_timestamps_with(&mut self, clock: &impl Clock) {
        self.started_at = NullTime::now_from(clock);
    }

    pub fn touch_end_timestamps(&mut self) {
        self.touch_end_timestamps_with(&SystemClock);
    }

    pub fn touch_end_timestamps_with(&mut self, clock: &impl Clock) {
        self.ended_at = NullTime::now_from(clock);
    }

    /// Returns whether `started_at` is set and strictly in the past.
    pub fn is_started(&self) -> bool {
        self.is_started_with(&SystemClock)
    }

    pub fn is_started_with(&self, clock: &impl Clock) -> bool {
        self.started_at
            .get()
            .is_some_and(|started| started < clock.now())
    }

    /// Returns whether `ended_at` is set and strictly in the future.
    ///
    /// A past `ended_at` reports `false`. Hosts depend on this exact
    /// comparison, so it is kept as is until the intended meaning is settled.
    pub fn is_ended(&self) -> bool {
        self.is_ended_with(&SystemClock)
    }

    pub fn is_ended_with(&self, clock: &impl Clock) -> bool {
        self.ended_at.get().is_some_and(|ended| ended > clock.now())
    }

    /// Signed `ended_at - started_at`, or `None` when either end is unset.
    pub fn length(&self) -> Option<TimeDelta> {
        let started = self.started_at.get()?;
        let ended = self.ended_at.get()?;
        Some(ended.signed_duration_since(started))
    }

    /// Length in nanoseconds; `0` when either end is unset.
    ///
    /// Negative when `ended_at` precedes `started_at`. Saturates at the `i64`
    /// bounds for spans longer than ~292 years.
    pub fn duration_length(&self) -> i64 {
        match self.length() {
            None => 0,
            Some(delta) => delta.num_nanoseconds().unwrap_or(if delta < TimeDelta::zero() {
                i64::MIN
            } else {
                i64::MAX
            }),
        }
    }
}

/// Host record that embeds a [`Duration`].
pub trait HasDuration {
    fn duration(&self) -> &Duration;
    fn duration_mut(&mut self) -> &mut Duration;
}

impl HasDuration for Duration {
    fn duration(&self) -> &Duration {
        self
    }

    fn duration_mut(&mut self) -> &mut Duration {
        self
    }
}
