// src/domain/logic.rs

use crate::domain::flight::{DelayRecord, FlightSnapshot};
use crate::domain::status::FlightStatus;
use chrono::{DateTime, Duration, Utc};

/// A latest delay strictly above this cancels the flight.
pub const CANCELLATION_THRESHOLD_MINUTES: i64 = 600;

/// Flights departing within this many minutes are boarding.
pub const BOARDING_WINDOW_MINUTES: i64 = 45;

/// Determines the next status of a flight for a pass running at `now`.
/// Returns `None` when the flight keeps its current status.
///
/// The order of checks determines precedence: cancellation, landing,
/// departure, then the pre-departure window. `latest_delay` is the delay
/// with the most recent update; `delayed_today` says whether any delay for
/// the flight was updated on the calendar date of `now`.
///
/// Two guards then veto the candidate: a boarding flight never reverts to
/// scheduled, and a delayed flight never clears back to scheduled or boarding.
pub fn next_status(
    flight: &FlightSnapshot,
    latest_delay: Option<&DelayRecord>,
    delayed_today: bool,
    now: DateTime<Utc>,
) -> Option<FlightStatus> {
    let old = flight.status;
    if old.is_terminal() {
        return None;
    }

    let candidate = candidate_status(flight, latest_delay, delayed_today, now);
    if is_suppressed(old, candidate) {
        return None;
    }

    (candidate != old).then_some(candidate)
}

fn candidate_status(
    flight: &FlightSnapshot,
    latest_delay: Option<&DelayRecord>,
    delayed_today: bool,
    now: DateTime<Utc>,
) -> FlightStatus {
    if latest_delay.is_some_and(|d| d.minutes_delayed > CANCELLATION_THRESHOLD_MINUTES) {
        return FlightStatus::Cancelled;
    }
    if flight.arrival_time < now {
        return FlightStatus::Landed;
    }
    if flight.departure_time < now {
        // Departed but still marked delayed: left alone until it lands or is cancelled.
        return match flight.status {
            FlightStatus::Delayed => FlightStatus::Delayed,
            _ => FlightStatus::InFlight,
        };
    }
    if delayed_today {
        return FlightStatus::Delayed;
    }
    if flight.departure_time - now <= Duration::minutes(BOARDING_WINDOW_MINUTES) {
        return FlightStatus::Boarding;
    }
    FlightStatus::Scheduled
}

fn is_suppressed(old: FlightStatus, candidate: FlightStatus) -> bool {
    matches!(
        (old, candidate),
        (FlightStatus::Boarding, FlightStatus::Scheduled)
            | (
                FlightStatus::Delayed,
                FlightStatus::Scheduled | FlightStatus::Boarding
            )
    )
}
