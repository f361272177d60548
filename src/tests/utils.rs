use crate::db::connection::{init_db, Database};
use crate::domain::FlightStatus;
use crate::errors::ServerError;
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::params;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fixed clock for deterministic tests: 2026-10-19 12:00:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

/// Initialize a fresh test DB using the production schema
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "flightdeck_test_{}_{:?}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        std::thread::current().id()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub struct Network {
    pub airline_id: i64,
    pub route_id: i64,
}

/// One airline flying RIX → LHR.
pub fn seed_network(db: &Database) -> Network {
    db.with_conn(|conn| {
        let map = |e: rusqlite::Error| ServerError::DbError(e.to_string());
        conn.execute(
            "insert into airports (code, name, city, country) values
                ('RIX', 'Riga International Airport', 'Riga', 'Latvia'),
                ('LHR', 'Heathrow Airport', 'London', 'United Kingdom')",
            [],
        )
        .map_err(map)?;
        conn.execute(
            "insert into airlines (name, iata_code, country) values ('airBaltic', 'BT', 'Latvia')",
            [],
        )
        .map_err(map)?;
        let airline_id = conn.last_insert_rowid();
        conn.execute(
            "insert into routes (departure_airport_id, arrival_airport_id)
             select dep.id, arr.id from airports dep, airports arr
             where dep.code = 'RIX' and arr.code = 'LHR'",
            [],
        )
        .map_err(map)?;
        let route_id = conn.last_insert_rowid();
        Ok(Network {
            airline_id,
            route_id,
        })
    })
    .expect("Failed to seed network")
}

pub fn insert_flight(
    db: &Database,
    network: &Network,
    flight_number: &str,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    status: FlightStatus,
) -> i64 {
    db.with_conn(|conn| {
        conn.execute(
            "insert into flights (flight_number, airline_id, route_id, departure_time, arrival_time, status)
             values (?, ?, ?, ?, ?, ?)",
            params![
                flight_number,
                network.airline_id,
                network.route_id,
                departure.timestamp(),
                arrival.timestamp(),
                status
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    })
    .expect("Failed to insert flight")
}

pub fn insert_delay(
    db: &Database,
    flight_id: i64,
    minutes_delayed: i64,
    updated_at: DateTime<Utc>,
) -> i64 {
    db.with_conn(|conn| {
        conn.execute(
            "insert into delays (flight_id, reason, minutes_delayed, updated_at) values (?, 'Weather', ?, ?)",
            params![flight_id, minutes_delayed, updated_at.timestamp()],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    })
    .expect("Failed to insert delay")
}

pub fn flight_status(db: &Database, flight_id: i64) -> FlightStatus {
    db.with_conn(|conn| {
        conn.query_row(
            "select status from flights where id = ?",
            params![flight_id],
            |row| row.get(0),
        )
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
    .expect("Failed to read flight status")
}

/// Runs raw SQL against the test DB, for rows the typed helpers cannot write.
pub fn exec_sql(db: &Database, sql: &str) {
    db.with_conn(|conn| {
        conn.execute_batch(sql)
            .map_err(|e| ServerError::DbError(e.to_string()))
    })
    .unwrap_or_else(|e| panic!("SQL failed: {e}"));
}
