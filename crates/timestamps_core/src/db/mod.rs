//! SQLite value binding for nullable timestamps.
//!
//! # Responsibility
//! - Let host repositories bind `NullTime` fields directly in `params![]` and
//!   read them back with `row.get(..)`.
//!
//! # Invariants
//! - Absent values map to SQL `NULL` and back.
//! - Present values are stored as text that keeps the UTC offset.

use crate::time::{NullTime, ZonedTime};
use rusqlite::types::{FromSql, FromSqlResult, ToSqlOutput, Value, ValueRef};
use rusqlite::ToSql;

impl ToSql for NullTime {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.as_time() {
            Some(time) => time.to_sql(),
            None => Ok(ToSqlOutput::Owned(Value::Null)),
        }
    }
}

impl FromSql for NullTime {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Option::<ZonedTime>::column_result(value).map(NullTime::from)
    }
}
