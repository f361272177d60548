use crate::app::AppState;
use crate::db::{flights, overview, Database};
use crate::domain::FlightStatus;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::spreadsheets::export_flights_xlsx;
use crate::templates::pages::{flights_page, overview_page, FlightsVm, OverviewVm};
use astra::Request;
use chrono::{Duration, Utc};
use rusqlite::Connection;
use std::collections::HashMap;
use tracing::warn;

const RECENT_WINDOW_HOURS: i64 = 24;
const RECENT_LIMIT: i64 = 10;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => overview(state),
        ("GET", "/flights") => {
            let filter = status_filter(&parse_query(&req))?;
            let flights = state
                .db
                .with_conn(|conn| flights::list_flights(conn, filter))?;
            html_response(flights_page(&FlightsVm { flights, filter }))
        }
        ("GET", "/flights/export.xlsx") => {
            let flights = state.db.with_conn(|conn| flights::list_flights(conn, None))?;
            export_flights_xlsx(&flights)
        }
        ("POST", "/flights/update-statuses") => {
            let report = state.engine.run(&state.db, Utc::now())?;
            let status = if report.is_clean() { 200 } else { 207 };
            json_response(status, &report)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Every overview render runs a status pass first. A failed pass, or a failed
/// query for one section, is reported on the page instead of failing the render.
fn overview(state: &AppState) -> ResultResp {
    let now = Utc::now();
    let status_pass = state.engine.run(&state.db, now).map_err(|e| {
        warn!(error = %e, "status pass failed during render");
        e.to_string()
    });

    let mut db_errors = Vec::new();
    let counts = safe_query(&state.db, &mut db_errors, "overview counts", |conn| {
        overview::get_overview_counts(conn)
    })
    .unwrap_or_default();
    let status_counts = safe_query(&state.db, &mut db_errors, "status breakdown", |conn| {
        flights::count_flights_by_status(conn)
    })
    .unwrap_or_else(|| FlightStatus::ALL.iter().map(|s| (*s, 0)).collect());
    let recent_flights = safe_query(&state.db, &mut db_errors, "recent flights", |conn| {
        flights::get_recent_flights(conn, now - Duration::hours(RECENT_WINDOW_HOURS), RECENT_LIMIT)
    })
    .unwrap_or_default();

    html_response(overview_page(&OverviewVm {
        counts,
        status_counts,
        recent_flights,
        status_pass,
        db_errors,
    }))
}

/// Runs one dashboard query; on failure logs it, records a message for the
/// page and returns `None`.
fn safe_query<T, F>(db: &Database, errors: &mut Vec<String>, what: &str, f: F) -> Option<T>
where
    F: FnOnce(&mut Connection) -> Result<T, ServerError>,
{
    match db.with_conn(f) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(query = what, error = %e, "dashboard query failed");
            errors.push(format!("{what}: {e}"));
            None
        }
    }
}

fn status_filter(query: &HashMap<String, String>) -> Result<Option<FlightStatus>, ServerError> {
    match query.get("status").map(|s| s.trim()) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
