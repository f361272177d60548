// src/domain/flight.rs

use crate::domain::status::FlightStatus;
use chrono::{DateTime, Utc};

/// The slice of a flight the status pass needs.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSnapshot {
    pub id: i64,
    /// Display only; not unique.
    pub flight_number: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
}

/// A recorded delay. `minutes_delayed` is the latest figure, not an increment.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayRecord {
    pub id: i64,
    pub flight_id: i64,
    pub reason: String,
    pub minutes_delayed: i64,
    pub updated_at: DateTime<Utc>,
}

/// A flight joined with its airline, route and latest delay, for tables and exports.
#[derive(Debug, Clone)]
pub struct FlightRow {
    pub id: i64,
    pub flight_number: String,
    pub airline_name: String,
    pub airline_code: String,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
    pub latest_delay_minutes: Option<i64>,
}

impl FlightRow {
    pub fn route_label(&self) -> String {
        format!(
            "{} → {}",
            self.origin.as_deref().unwrap_or("?"),
            self.destination.as_deref().unwrap_or("?")
        )
    }
}
