pub mod connection;
pub mod delays;
pub mod flights;
pub mod overview;
pub mod store;

pub use connection::{init_db, Database};

use chrono::{DateTime, Utc};
use rusqlite::types::Type;

/// Timestamps are stored as UTC unix seconds.
pub(crate) fn timestamp_to_unix(ts: DateTime<Utc>) -> i64 {
    ts.timestamp()
}

/// Reads a stored unix timestamp, failing the row mapping if it is out of range.
pub(crate) fn timestamp_from_unix(secs: i64, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            Type::Integer,
            format!("timestamp {secs} out of range").into(),
        )
    })
}
