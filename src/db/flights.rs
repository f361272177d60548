// src/db/flights.rs
use crate::db::{timestamp_from_unix, timestamp_to_unix};
use crate::domain::{FlightRow, FlightSnapshot, FlightStatus};
use crate::engine::{FlightFailure, FlightScan};
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

const SQL_FLIGHT_ROWS: &str = r#"
    select
        f.id,
        f.flight_number,
        a.name,
        a.iata_code,
        dep.code,
        arr.code,
        f.departure_time,
        f.arrival_time,
        f.status,
        (
            select d.minutes_delayed
            from delays d
            where d.flight_id = f.id
            order by d.updated_at desc, d.id desc
            limit 1
        )
    from flights f
    join airlines a on a.id = f.airline_id
    join routes r on r.id = f.route_id
    left join airports dep on dep.id = r.departure_airport_id
    left join airports arr on arr.id = r.arrival_airport_id
"#;

/// All flights the status pass may still move: everything not landed or cancelled.
///
/// Rows are decoded one at a time; a row that fails to decode lands in
/// `unreadable` instead of failing the scan.
pub fn get_active_flights(conn: &Connection) -> Result<FlightScan, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, flight_number, departure_time, arrival_time, status
             from flights
             where status not in (?, ?)
             order by id",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(
            params![FlightStatus::Cancelled, FlightStatus::Landed],
            |row| {
                let id: i64 = row.get(0)?;
                Ok(map_snapshot(row).map_err(|e| FlightFailure {
                    flight_id: id,
                    flight_number: row.get::<_, String>(1).unwrap_or_default(),
                    error: ServerError::DbError(e.to_string()).to_string(),
                }))
            },
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut scan = FlightScan::default();
    for r in rows {
        match r.map_err(|e| ServerError::DbError(e.to_string()))? {
            Ok(flight) => scan.flights.push(flight),
            Err(failure) => scan.unreadable.push(failure),
        }
    }
    Ok(scan)
}

fn map_snapshot(row: &Row<'_>) -> rusqlite::Result<FlightSnapshot> {
    Ok(FlightSnapshot {
        id: row.get(0)?,
        flight_number: row.get(1)?,
        departure_time: timestamp_from_unix(row.get(2)?, 2)?,
        arrival_time: timestamp_from_unix(row.get(3)?, 3)?,
        status: row.get(4)?,
    })
}

pub fn update_flight_status(
    conn: &Connection,
    flight_id: i64,
    status: FlightStatus,
) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "update flights set status = ? where id = ?",
            params![status, flight_id],
        )
        .map_err(|e| ServerError::DbError(format!("update flight status failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::DbError(format!("flight {flight_id} not found")));
    }
    Ok(())
}

/// Flights for the dashboard table, optionally narrowed to one status.
pub fn list_flights(
    conn: &Connection,
    status: Option<FlightStatus>,
) -> Result<Vec<FlightRow>, ServerError> {
    let sql = format!(
        "{SQL_FLIGHT_ROWS} where (?1 is null or f.status = ?1) order by f.departure_time, f.id"
    );
    query_flight_rows(conn, &sql, params![status])
}

/// Up to `limit` flights departing at or after `since`, soonest first.
pub fn get_recent_flights(
    conn: &Connection,
    since: DateTime<Utc>,
    limit: i64,
) -> Result<Vec<FlightRow>, ServerError> {
    let sql = format!(
        "{SQL_FLIGHT_ROWS} where f.departure_time >= ?1 order by f.departure_time, f.id limit ?2"
    );
    query_flight_rows(conn, &sql, params![timestamp_to_unix(since), limit])
}

/// Count of flights per status, in `FlightStatus::ALL` order, zeros included.
pub fn count_flights_by_status(
    conn: &Connection,
) -> Result<Vec<(FlightStatus, i64)>, ServerError> {
    let mut stmt = conn
        .prepare("select status, count(*) from flights group by status")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, FlightStatus>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut counts: Vec<(FlightStatus, i64)> =
        FlightStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for r in rows {
        let (status, n) = r.map_err(|e| ServerError::DbError(e.to_string()))?;
        if let Some(slot) = counts.iter_mut().find(|(s, _)| *s == status) {
            slot.1 = n;
        }
    }
    Ok(counts)
}

fn query_flight_rows(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> Result<Vec<FlightRow>, ServerError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params, map_flight_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

fn map_flight_row(row: &Row<'_>) -> rusqlite::Result<FlightRow> {
    Ok(FlightRow {
        id: row.get(0)?,
        flight_number: row.get(1)?,
        airline_name: row.get(2)?,
        airline_code: row.get(3)?,
        origin: row.get(4)?,
        destination: row.get(5)?,
        departure_time: timestamp_from_unix(row.get(6)?, 6)?,
        arrival_time: timestamp_from_unix(row.get(7)?, 7)?,
        status: row.get(8)?,
        latest_delay_minutes: row.get(9)?,
    })
}
