// src/engine.rs
//! The flight status pass: reclassifies every non-terminal flight from the
//! clock and its delay records, writing back only the flights that change.

use crate::db::Database;
use crate::domain::{next_status, DelayRecord, FlightSnapshot, FlightStatus};
use crate::errors::ServerError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};

/// What the status pass reads from and writes to.
pub trait FlightStore {
    /// Flights whose status is neither landed nor cancelled.
    fn active_flights(&self) -> Result<FlightScan, ServerError>;

    /// Delay with the most recent update for the flight, if any.
    fn latest_delay(&self, flight_id: i64) -> Result<Option<DelayRecord>, ServerError>;

    /// Whether any delay for the flight was updated on `day` (UTC).
    fn has_delay_on(&self, flight_id: i64, day: NaiveDate) -> Result<bool, ServerError>;

    fn set_status(&self, flight_id: i64, status: FlightStatus) -> Result<(), ServerError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightFailure {
    pub flight_id: i64,
    pub flight_number: String,
    pub error: String,
}

/// Active flights, plus the rows that could not be decoded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlightScan {
    pub flights: Vec<FlightSnapshot>,
    pub unreadable: Vec<FlightFailure>,
}

/// Outcome of one pass. `updated` counts successful writes only.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdateReport {
    pub updated: usize,
    pub failed: Vec<FlightFailure>,
}

impl StatusUpdateReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs one status pass against `store` as of `now`.
///
/// A failure on one flight, including a row that cannot be decoded, is
/// recorded and the pass moves on; only a failed flights query aborts it.
pub fn update_flight_statuses<S>(
    store: &S,
    now: DateTime<Utc>,
) -> Result<StatusUpdateReport, ServerError>
where
    S: FlightStore + ?Sized,
{
    let today = now.date_naive();
    let FlightScan {
        flights,
        unreadable,
    } = store.active_flights()?;
    let scanned = flights.len() + unreadable.len();
    let mut report = StatusUpdateReport::default();

    for failure in unreadable {
        warn!(
            flight_id = failure.flight_id,
            error = %failure.error,
            "skipping unreadable flight row"
        );
        report.failed.push(failure);
    }

    for flight in &flights {
        match evaluate_and_commit(store, flight, today, now) {
            Ok(Some(status)) => {
                debug!(
                    flight_id = flight.id,
                    flight_number = %flight.flight_number,
                    from = %flight.status,
                    to = %status,
                    "flight status changed"
                );
                report.updated += 1;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(
                    flight_id = flight.id,
                    flight_number = %flight.flight_number,
                    error = %e,
                    "status update failed"
                );
                report.failed.push(FlightFailure {
                    flight_id: flight.id,
                    flight_number: flight.flight_number.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        scanned,
        updated = report.updated,
        failed = report.failed.len(),
        "flight status pass complete"
    );
    Ok(report)
}

fn evaluate_and_commit<S>(
    store: &S,
    flight: &FlightSnapshot,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Option<FlightStatus>, ServerError>
where
    S: FlightStore + ?Sized,
{
    let latest = store.latest_delay(flight.id)?;
    let delayed_today = store.has_delay_on(flight.id, today)?;

    match next_status(flight, latest.as_ref(), delayed_today, now) {
        Some(status) => {
            store.set_status(flight.id, status)?;
            Ok(Some(status))
        }
        None => Ok(None),
    }
}

/// Serializes status passes: dashboard renders and the scheduler share one
/// engine, and at most one pass touches the flights table at a time.
#[derive(Debug, Default)]
pub struct StatusEngine {
    pass: Mutex<()>,
}

impl StatusEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(
        &self,
        db: &Database,
        now: DateTime<Utc>,
    ) -> Result<StatusUpdateReport, ServerError> {
        // The guarded value is (), so a poisoned lock carries no broken state.
        let _guard = self.pass.lock().unwrap_or_else(PoisonError::into_inner);
        db.with_conn(|conn| update_flight_statuses(&*conn, now))
    }
}
