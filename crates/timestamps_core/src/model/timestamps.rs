//! Created/updated/deleted triplet for audited records.
//!
//! # Responsibility
//! - Hold audit timestamps and their layout accessors.
//! - Provide soft-delete lifecycle helpers.
//!
//! # Invariants
//! - `deleted_at` presence is the only soft-delete marker.
//! - `load_default_timestamps` fills `created_at`/`updated_at` independently and
//!   never touches `deleted_at`.

use super::accessors::null_time_accessors;
use crate::time::{Clock, NullTime, SystemClock};
use serde::{Deserialize, Serialize};

/// Embeddable audit timestamp triplet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timestamps {
    pub created_at: NullTime,
    pub updated_at: NullTime,
    /// Soft delete tombstone; unset means the record is live.
    pub deleted_at: NullTime,
}

null_time_accessors!(Timestamps {
    created_at,
    updated_at,
    deleted_at,
});

impl Timestamps {
    /// Creates a triplet with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills unset `created_at` and `updated_at` with now.
    pub fn load_default_timestamps(&mut self) {
        self.load_default_timestamps_with(&SystemClock);
    }

    pub fn load_default_timestamps_with(&mut self, clock: &impl Clock) {
        if self.created_at.is_null() {
            self.created_at = NullTime::now_from(clock);
        }
        if self.updated_at.is_null() {
            self.updated_at = NullTime::now_from(clock);
        }
    }

    pub fn touch_create_timestamps(&mut self) {
        self.touch_create_timestamps_with(&SystemClock);
    }

    pub fn touch_create_timestamps_with(&mut self, clock: &impl Clock) {
        self.created_at = NullTime::now_from(clock);
    }

    pub fn touch_update_timestamps(&mut self) {
        self.touch_update_timestamps_with(&SystemClock);
    }

    pub fn touch_update_timestamps_with(&mut self, clock: &impl Clock) {
        self.updated_at = NullTime::now_from(clock);
    }

    pub fn touch_delete_timestamps(&mut self) {
        self.touch_delete_timestamps_with(&SystemClock);
    }

    pub fn touch_delete_timestamps_with(&mut self, clock: &impl Clock) {
        self.deleted_at = NullTime::now_from(clock);
    }

    /// Returns whether the record carries a soft delete tombstone.
    pub fn is_delete(&self) -> bool {
        self.deleted_at.is_valid()
    }
}

/// Host record that embeds [`Timestamps`].
///
/// Provided methods route soft-delete through the embedded triplet so hosts
/// do not reach into the fields directly.
pub trait HasTimestamps {
    fn timestamps(&self) -> &Timestamps;
    fn timestamps_mut(&mut self) -> &mut Timestamps;

    /// Marks the host softly deleted (tombstoned) at now.
    fn soft_delete(&mut self) {
        self.timestamps_mut().touch_delete_timestamps();
    }

    fn is_soft_deleted(&self) -> bool {
        self.timestamps().is_delete()
    }
}

impl HasTimestamps for Timestamps {
    fn timestamps(&self) -> &Timestamps {
        self
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        self
    }
}
