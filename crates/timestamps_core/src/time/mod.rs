//! Nullable timestamp value and the layouts used to render/parse it.
//!
//! # Responsibility
//! - Define `NullTime`, the optional instant every container field is built on.
//! - Keep all layout handling (zone, precision) in one place so containers stay
//!   thin pass-throughs.
//! - Provide the `Clock` seam used by "now"-reading operations.
//!
//! # Invariants
//! - An absent `NullTime` formats to `""` and never to the epoch instant.
//! - Parse failures surface as `ParseError`; formatting never fails.
//! - Zone-less input is interpreted in the process-local time zone.

mod clock;
mod layout;
mod null_time;

pub use clock::{Clock, ManualClock, SystemClock};
pub use layout::{Layout, ParseError, ZonedTime, DATE_LAYOUT, FINE_DATE_LAYOUT};
pub use null_time::NullTime;
