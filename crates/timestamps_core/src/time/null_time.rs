//! Optional timestamp value.
//!
//! # Responsibility
//! - Represent "no timestamp recorded" distinctly from any instant.
//! - Offer one parse/format pair per fixed layout plus a custom-layout pair.
//!
//! # Invariants
//! - Absent values format to `""` for every layout.
//! - A failed parse yields an error and no value.

use super::clock::{Clock, SystemClock};
use super::layout::{Layout, ParseError, ZonedTime};
use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Timestamp that may be absent.
///
/// Serialized as an RFC 3339 string, or `null` when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NullTime(Option<ZonedTime>);

impl NullTime {
    /// Absent timestamp.
    pub const fn null() -> Self {
        Self(None)
    }

    /// Present timestamp at `time`, keeping its UTC offset.
    pub fn at<Tz: TimeZone>(time: DateTime<Tz>) -> Self {
        Self(Some(time.fixed_offset()))
    }

    /// Absent timestamp whose placeholder instant (see [`NullTime::time`]) is
    /// the Unix epoch.
    ///
    /// Equal to [`NullTime::null`]; kept for hosts that want to spell out the
    /// placeholder intent.
    pub const fn zero() -> Self {
        Self(None)
    }

    /// Present timestamp at the current local time.
    pub fn now() -> Self {
        Self::now_from(&SystemClock)
    }

    /// Present timestamp at `clock`'s current time.
    pub fn now_from(clock: &impl Clock) -> Self {
        Self(Some(clock.now()))
    }

    /// `true` when a timestamp is present.
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// `true` when no timestamp is recorded.
    pub const fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Stored instant, if any.
    pub fn get(&self) -> Option<ZonedTime> {
        self.0
    }

    /// Borrowed view of the stored instant.
    pub fn as_time(&self) -> Option<&ZonedTime> {
        self.0.as_ref()
    }

    /// Stored instant, or the Unix epoch when absent.
    ///
    /// Callers that care about presence should use [`NullTime::get`].
    pub fn time(&self) -> ZonedTime {
        self.0
            .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }

    /// Parses `text` with `layout`.
    ///
    /// # Errors
    /// - Returns `ParseError` when `text` does not match `layout`, or when a
    ///   zone-less `text` names a local time that does not exist.
    pub fn parse(layout: Layout<'_>, text: &str) -> Result<Self, ParseError> {
        match layout.parse(text) {
            Ok(time) => Ok(Self(Some(time))),
            Err(err) => {
                debug!(
                    "event=time_parse module=time status=error layout={} error_code={}",
                    layout.name(),
                    err.code()
                );
                Err(err)
            }
        }
    }

    /// Formats with `layout`; absent values render as `""`.
    pub fn format(&self, layout: Layout<'_>) -> String {
        self.0
            .map(|time| layout.format(&time))
            .unwrap_or_default()
    }

    /// Parses `text` with a chrono `strftime` layout.
    ///
    /// # Errors
    /// - Same as [`NullTime::parse`].
    pub fn parse_with_layout(layout: &str, text: &str) -> Result<Self, ParseError> {
        Self::parse(Layout::Custom(layout), text)
    }

    /// Formats with a chrono `strftime` layout; `""` when absent or when the
    /// layout is unusable.
    pub fn format_with_layout(&self, layout: &str) -> String {
        self.format(Layout::Custom(layout))
    }

    /// Parses `2006-01-02 15:04:05`, read in local time.
    pub fn parse_date(text: &str) -> Result<Self, ParseError> {
        Self::parse(Layout::Date, text)
    }

    /// Formats as `2006-01-02 15:04:05`.
    pub fn format_date(&self) -> String {
        self.format(Layout::Date)
    }

    /// Parses `2006-01-02 15:04:05 Z07:00`.
    pub fn parse_date_with_zone(text: &str) -> Result<Self, ParseError> {
        Self::parse(Layout::DateWithZone, text)
    }

    /// Formats as `2006-01-02 15:04:05 Z07:00`.
    pub fn format_date_with_zone(&self) -> String {
        self.format(Layout::DateWithZone)
    }

    /// Parses `2006-01-02 15:04:05.999999999`, read in local time.
    pub fn parse_fine_date(text: &str) -> Result<Self, ParseError> {
        Self::parse(Layout::FineDate, text)
    }

    /// Formats as `2006-01-02 15:04:05.999999999`.
    pub fn format_fine_date(&self) -> String {
        self.format(Layout::FineDate)
    }

    /// Parses `2006-01-02 15:04:05.999999999 Z07:00`.
    pub fn parse_fine_date_with_zone(text: &str) -> Result<Self, ParseError> {
        Self::parse(Layout::FineDateWithZone, text)
    }

    /// Formats as `2006-01-02 15:04:05.999999999 Z07:00`.
    pub fn format_fine_date_with_zone(&self) -> String {
        self.format(Layout::FineDateWithZone)
    }

    /// Parses RFC 3339 with whole seconds.
    pub fn parse_rfc3339(text: &str) -> Result<Self, ParseError> {
        Self::parse(Layout::Rfc3339, text)
    }

    /// Formats as RFC 3339 with whole seconds.
    pub fn format_rfc3339(&self) -> String {
        self.format(Layout::Rfc3339)
    }

    /// Parses RFC 3339 with up to nanoseconds.
    pub fn parse_rfc3339_nano(text: &str) -> Result<Self, ParseError> {
        Self::parse(Layout::Rfc3339Nano, text)
    }

    /// Formats as RFC 3339 with up to nanoseconds.
    pub fn format_rfc3339_nano(&self) -> String {
        self.format(Layout::Rfc3339Nano)
    }
}

impl From<ZonedTime> for NullTime {
    fn from(value: ZonedTime) -> Self {
        Self(Some(value))
    }
}

impl From<Option<ZonedTime>> for NullTime {
    fn from(value: Option<ZonedTime>) -> Self {
        Self(value)
    }
}

impl From<NullTime> for Option<ZonedTime> {
    fn from(value: NullTime) -> Self {
        value.0
    }
}
