// src/domain/status.rs

use crate::errors::ServerError;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;

/// Operational status of a flight, stored verbatim in `flights.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightStatus {
    Scheduled,
    Boarding,
    Delayed,
    InFlight,
    Landed,
    Cancelled,
}

impl FlightStatus {
    /// Display order used by the dashboard breakdown.
    pub const ALL: [FlightStatus; 6] = [
        FlightStatus::Scheduled,
        FlightStatus::Boarding,
        FlightStatus::Delayed,
        FlightStatus::InFlight,
        FlightStatus::Landed,
        FlightStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Boarding => "Boarding",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::InFlight => "In Flight",
            FlightStatus::Landed => "Landed",
            FlightStatus::Cancelled => "Cancelled",
        }
    }

    /// Landed and cancelled flights are never revisited by the status pass.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlightStatus::Landed | FlightStatus::Cancelled)
    }

    /// CSS class suffix for the status badge.
    pub fn slug(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "scheduled",
            FlightStatus::Boarding => "boarding",
            FlightStatus::Delayed => "delayed",
            FlightStatus::InFlight => "in-flight",
            FlightStatus::Landed => "landed",
            FlightStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightStatus {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlightStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ServerError::BadRequest(format!("unknown flight status '{s}'")))
    }
}

impl ToSql for FlightStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for FlightStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_str()?;
        raw.parse()
            .map_err(|e: ServerError| FromSqlError::Other(Box::new(e)))
    }
}
