//! Layout registry and the parse/format routines behind it.
//!
//! # Responsibility
//! - Describe the six fixed layouts as rows of one shape table.
//! - Parse and format caller-supplied `strftime` layouts.
//!
//! # Invariants
//! - Fixed layouts render fractions with trailing zeros trimmed and a zero
//!   offset as `Z`.
//! - An unusable custom layout renders as `""` instead of panicking.

use chrono::format::{self, Fixed, Item, Numeric, Pad, ParseErrorKind, Parsed};
use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Timelike, Utc,
};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter, Write};

/// Instant paired with the UTC offset it was created or parsed with.
pub type ZonedTime = DateTime<FixedOffset>;

/// `strftime` rendering of the plain `date` layout.
pub const DATE_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";
/// `strftime` rendering of the sub-second `fine_date` layout.
///
/// chrono renders `%.f` with 3, 6 or 9 digits; `Layout::FineDate` trims instead.
pub const FINE_DATE_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.f";

const RFC3339_BASE_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S";

// `Item::Literal` matches exactly; a space in a strftime string would match
// any run of whitespace, including none.
const DATE_TIME_ITEMS: &[Item<'static>] = &[
    Item::Numeric(Numeric::Year, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Numeric::Month, Pad::Zero),
    Item::Literal("-"),
    Item::Numeric(Numeric::Day, Pad::Zero),
    Item::Literal(" "),
    Item::Numeric(Numeric::Hour, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Minute, Pad::Zero),
    Item::Literal(":"),
    Item::Numeric(Numeric::Second, Pad::Zero),
    Item::Fixed(Fixed::Nanosecond),
];
const ZONE_ITEMS: &[Item<'static>] = &[
    Item::Literal(" "),
    Item::Fixed(Fixed::TimezoneOffsetColonZ),
];

/// Textual convention used to render or parse a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout<'a> {
    /// `2006-01-02 15:04:05`
    Date,
    /// `2006-01-02 15:04:05 Z07:00`
    DateWithZone,
    /// `2006-01-02 15:04:05.999999999`
    FineDate,
    /// `2006-01-02 15:04:05.999999999 Z07:00`
    FineDateWithZone,
    /// RFC 3339 with whole seconds.
    Rfc3339,
    /// RFC 3339 with up to nanosecond precision.
    Rfc3339Nano,
    /// Caller-supplied chrono `strftime` layout.
    ///
    /// Layouts without an offset read local time. A layout without a time
    /// reads midnight, and one without a date reads 1970-01-01.
    Custom(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    None,
    Spaced,
    Attached,
}

#[derive(Debug, Clone, Copy)]
enum Shape<'a> {
    Fixed {
        base: &'static str,
        fine: bool,
        zone: Zone,
    },
    Custom(&'a str),
}

impl Layout<'static> {
    /// Every fixed layout, in declaration order.
    pub const FIXED: [Layout<'static>; 6] = [
        Layout::Date,
        Layout::DateWithZone,
        Layout::FineDate,
        Layout::FineDateWithZone,
        Layout::Rfc3339,
        Layout::Rfc3339Nano,
    ];
}

impl<'a> Layout<'a> {
    /// Stable name used in diagnostics. Custom layouts report themselves.
    pub fn name(&self) -> &'a str {
        match self {
            Self::Date => "date",
            Self::DateWithZone => "date_with_zone",
            Self::FineDate => "fine_date",
            Self::FineDateWithZone => "fine_date_with_zone",
            Self::Rfc3339 => "rfc3339",
            Self::Rfc3339Nano => "rfc3339_nano",
            Self::Custom(layout) => *layout,
        }
    }

    /// Renders `time` in its own offset.
    pub fn format(&self, time: &ZonedTime) -> String {
        match self.shape() {
            Shape::Fixed { base, fine, zone } => {
                let mut out = time.format(base).to_string();
                if fine {
                    push_fraction(&mut out, time.nanosecond());
                }
                match zone {
                    Zone::None => {}
                    Zone::Spaced => {
                        out.push(' ');
                        push_zone(&mut out, time.offset());
                    }
                    Zone::Attached => push_zone(&mut out, time.offset()),
                }
                out
            }
            Shape::Custom(layout) => format_custom(layout, time),
        }
    }

    /// Parses `text`, falling back to the local time zone when the layout
    /// carries no offset.
    ///
    /// # Errors
    /// - `ParseError::Mismatch` when `text` does not match the layout.
    /// - `ParseError::OffsetMismatch` when a zone is spelled other than `Z` or
    ///   `+HH:MM`.
    /// - `ParseError::NonexistentLocalTime` when a zone-less `text` names a
    ///   wall-clock time skipped by the local zone.
    pub fn parse(&self, text: &str) -> Result<ZonedTime, ParseError> {
        let name = self.name();
        match self.shape() {
            Shape::Fixed {
                zone: Zone::None, ..
            } => {
                // Fraction is optional here, so the plain layout accepts it too.
                let naive = parse_items(text, DATE_TIME_ITEMS.iter())
                    .and_then(|parsed| parsed.to_naive_datetime_with_offset(0))
                    .map_err(|source| ParseError::mismatch(name, source))?;
                localize(naive, name)
            }
            Shape::Fixed {
                zone: Zone::Spaced, ..
            } => parse_spaced_zone(text, name),
            Shape::Fixed {
                zone: Zone::Attached,
                ..
            } => DateTime::parse_from_rfc3339(text)
                .map_err(|source| ParseError::mismatch(name, source)),
            Shape::Custom(layout) => parse_custom(layout, text),
        }
    }

    fn shape(&self) -> Shape<'a> {
        let (base, fine, zone) = match self {
            Self::Date => (DATE_LAYOUT, false, Zone::None),
            Self::DateWithZone => (DATE_LAYOUT, false, Zone::Spaced),
            Self::FineDate => (DATE_LAYOUT, true, Zone::None),
            Self::FineDateWithZone => (DATE_LAYOUT, true, Zone::Spaced),
            Self::Rfc3339 => (RFC3339_BASE_LAYOUT, false, Zone::Attached),
            Self::Rfc3339Nano => (RFC3339_BASE_LAYOUT, true, Zone::Attached),
            Self::Custom(layout) => return Shape::Custom(*layout),
        };
        Shape::Fixed { base, fine, zone }
    }
}

impl Display for Layout<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to turn text into a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Text does not match the requested layout.
    Mismatch {
        layout: String,
        source: chrono::ParseError,
    },
    /// Text matched except for an offset that is neither `Z` nor `±HH:MM`.
    OffsetMismatch { layout: String },
    /// Text matched but names a local time that does not exist (DST gap).
    NonexistentLocalTime { layout: String },
}

impl ParseError {
    fn mismatch(layout: &str, source: chrono::ParseError) -> Self {
        Self::Mismatch {
            layout: layout.to_string(),
            source,
        }
    }

    /// Layout name the failing parse was attempted with.
    pub fn layout(&self) -> &str {
        match self {
            Self::Mismatch { layout, .. }
            | Self::OffsetMismatch { layout }
            | Self::NonexistentLocalTime { layout } => layout,
        }
    }

    /// Short machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Mismatch { .. } => "layout_mismatch",
            Self::OffsetMismatch { .. } => "offset_mismatch",
            Self::NonexistentLocalTime { .. } => "nonexistent_local_time",
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mismatch { layout, source } => {
                write!(f, "cannot parse time with layout `{layout}`: {source}")
            }
            Self::OffsetMismatch { layout } => write!(
                f,
                "cannot parse time with layout `{layout}`: offset must be `Z` or `+HH:MM`"
            ),
            Self::NonexistentLocalTime { layout } => write!(
                f,
                "time parsed with layout `{layout}` does not exist in the local time zone"
            ),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mismatch { source, .. } => Some(source),
            Self::OffsetMismatch { .. } | Self::NonexistentLocalTime { .. } => None,
        }
    }
}

fn push_fraction(out: &mut String, nanos: u32) {
    // Leap seconds are carried as nanos >= 1e9.
    let nanos = nanos % 1_000_000_000;
    if nanos == 0 {
        return;
    }
    let digits = format!("{nanos:09}");
    out.push('.');
    out.push_str(digits.trim_end_matches('0'));
}

fn push_zone(out: &mut String, offset: &FixedOffset) {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        out.push('Z');
        return;
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    let _ = write!(out, "{sign}{:02}:{:02}", seconds / 3600, seconds % 3600 / 60);
}

fn parse_items<'a, I>(text: &str, items: I) -> chrono::ParseResult<Parsed>
where
    I: Iterator<Item = &'a Item<'static>>,
{
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, text, items)?;
    Ok(parsed)
}

fn parse_spaced_zone(text: &str, layout: &str) -> Result<ZonedTime, ParseError> {
    let time = parse_items(text, DATE_TIME_ITEMS.iter().chain(ZONE_ITEMS))
        .and_then(|parsed| parsed.to_datetime())
        .map_err(|source| ParseError::mismatch(layout, source))?;

    // chrono also takes `+0200`, `+02 00` and friends for this item.
    let zone = text.rsplit_once(' ').map_or(text, |(_, zone)| zone);
    if !is_strict_offset(zone) {
        return Err(ParseError::OffsetMismatch {
            layout: layout.to_string(),
        });
    }
    Ok(time)
}

fn is_strict_offset(zone: &str) -> bool {
    match zone.as_bytes() {
        [b'Z'] => true,
        [sign, h1, h2, b':', m1, m2] => {
            matches!(*sign, b'+' | b'-') && [h1, h2, m1, m2].iter().all(|b| b.is_ascii_digit())
        }
        _ => false,
    }
}

fn localize(naive: NaiveDateTime, layout: &str) -> Result<ZonedTime, ParseError> {
    resolve_local(Local.from_local_datetime(&naive), layout)
}

/// Picks the earlier instant of a DST overlap; chrono does not order the pair.
fn resolve_local<Tz: TimeZone>(
    resolved: LocalResult<DateTime<Tz>>,
    layout: &str,
) -> Result<ZonedTime, ParseError> {
    let time = match resolved {
        LocalResult::Single(time) => time,
        LocalResult::Ambiguous(first, second) => first.min(second),
        LocalResult::None => {
            return Err(ParseError::NonexistentLocalTime {
                layout: layout.to_string(),
            })
        }
    };
    Ok(time.fixed_offset())
}

fn parse_custom(layout: &str, text: &str) -> Result<ZonedTime, ParseError> {
    match DateTime::parse_from_str(text, layout) {
        Ok(time) => return Ok(time),
        Err(err) if err.kind() != ParseErrorKind::NotEnough => {
            return Err(ParseError::mismatch(layout, err));
        }
        Err(_) => {}
    }

    // No offset in the layout: read it as local wall-clock time.
    match NaiveDateTime::parse_from_str(text, layout) {
        Ok(naive) => return localize(naive, layout),
        Err(err) if err.kind() != ParseErrorKind::NotEnough => {
            return Err(ParseError::mismatch(layout, err));
        }
        Err(_) => {}
    }

    match NaiveDate::parse_from_str(text, layout) {
        Ok(date) => return localize(date.and_time(NaiveTime::MIN), layout),
        Err(err) if err.kind() != ParseErrorKind::NotEnough => {
            return Err(ParseError::mismatch(layout, err));
        }
        Err(_) => {}
    }

    let time = NaiveTime::parse_from_str(text, layout)
        .map_err(|source| ParseError::mismatch(layout, source))?;
    let epoch = DateTime::<Utc>::UNIX_EPOCH.date_naive();
    localize(epoch.and_time(time), layout)
}

fn format_custom(layout: &str, time: &ZonedTime) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(layout)).is_err() {
        warn!("event=time_format module=time status=error error_code=invalid_layout layout={layout}");
        return String::new();
    }
    out
}
