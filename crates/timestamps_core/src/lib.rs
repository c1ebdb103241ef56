//! Embeddable lifecycle timestamps for persistence-layer records.
//! Hosts embed `Timestamps` and/or `Duration` by value; both build on `NullTime`.

pub mod db;
pub mod logging;
pub mod model;
pub mod time;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::duration::{Duration, HasDuration};
pub use model::timestamps::{HasTimestamps, Timestamps};
pub use time::{
    Clock, Layout, ManualClock, NullTime, ParseError, SystemClock, ZonedTime, DATE_LAYOUT,
    FINE_DATE_LAYOUT,
};
