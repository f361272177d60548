use crate::db::{timestamp_from_unix, timestamp_to_unix};
use crate::domain::DelayRecord;
use crate::errors::ServerError;
use chrono::{Duration, NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension};

/// The delay with the most recent `updated_at` for a flight.
/// Ties on `updated_at` go to the most recently inserted row (highest id).
pub fn get_latest_delay(
    conn: &Connection,
    flight_id: i64,
) -> Result<Option<DelayRecord>, ServerError> {
    conn.query_row(
        "select id, flight_id, reason, minutes_delayed, updated_at
         from delays
         where flight_id = ?
         order by updated_at desc, id desc
         limit 1",
        params![flight_id],
        |row| {
            Ok(DelayRecord {
                id: row.get(0)?,
                flight_id: row.get(1)?,
                reason: row.get(2)?,
                minutes_delayed: row.get(3)?,
                updated_at: timestamp_from_unix(row.get(4)?, 4)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load latest delay failed: {e}")))
}

/// Whether any delay for the flight was updated on the given UTC calendar date.
pub fn has_delay_updated_on(
    conn: &Connection,
    flight_id: i64,
    day: NaiveDate,
) -> Result<bool, ServerError> {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1);

    conn.query_row(
        "select exists(
             select 1 from delays
             where flight_id = ? and updated_at >= ? and updated_at < ?
         )",
        params![flight_id, timestamp_to_unix(start), timestamp_to_unix(end)],
        |row| row.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("check delays for day failed: {e}")))
}
