// src/db/store.rs
use crate::db::{delays, flights};
use crate::domain::{DelayRecord, FlightStatus};
use crate::engine::{FlightScan, FlightStore};
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::Connection;

impl FlightStore for Connection {
    fn active_flights(&self) -> Result<FlightScan, ServerError> {
        flights::get_active_flights(self)
    }

    fn latest_delay(&self, flight_id: i64) -> Result<Option<DelayRecord>, ServerError> {
        delays::get_latest_delay(self, flight_id)
    }

    fn has_delay_on(&self, flight_id: i64, day: NaiveDate) -> Result<bool, ServerError> {
        delays::has_delay_updated_on(self, flight_id, day)
    }

    fn set_status(&self, flight_id: i64, status: FlightStatus) -> Result<(), ServerError> {
        flights::update_flight_status(self, flight_id, status)
    }
}
