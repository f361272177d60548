use super::{body_string, send};
use crate::app::AppState;
use crate::domain::FlightStatus;
use crate::tests::utils::{exec_sql, flight_status, init_test_db, insert_flight, seed_network};
use chrono::{Duration, Utc};
use http::Method;

#[test]
fn overview_runs_status_pass_before_rendering() {
    let db = init_test_db();
    let net = seed_network(&db);
    let now = Utc::now();
    let boarding = insert_flight(
        &db,
        &net,
        "BT651",
        now + Duration::minutes(30),
        now + Duration::hours(3),
        FlightStatus::Scheduled,
    );
    let state = AppState::new(db);

    let resp = send(&state, Method::GET, "/");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("System Overview"));
    assert!(body.contains("<strong>1</strong> flight(s) updated"));
    assert!(body.contains("BT651"));
    assert_eq!(flight_status(&state.db, boarding), FlightStatus::Boarding);

    let second = body_string(send(&state, Method::GET, "/"));
    assert!(second.contains("<strong>0</strong> flight(s) updated"));
}

#[test]
fn overview_shows_metrics_for_empty_schema() {
    let state = AppState::new(init_test_db());

    let body = body_string(send(&state, Method::GET, "/"));

    assert!(body.contains("Total Flights"));
    assert!(body.contains("Airlines"));
    assert!(body.contains("No flights to show."));
}

#[test]
fn overview_warns_when_some_flights_fail() {
    let db = init_test_db();
    let net = seed_network(&db);
    let now = Utc::now();
    let boarding = insert_flight(&db, &net, "BT661", now + Duration::minutes(15), now + Duration::hours(3), FlightStatus::Scheduled);
    let broken = insert_flight(&db, &net, "BT662", now + Duration::hours(5), now + Duration::hours(8), FlightStatus::Scheduled);
    exec_sql(
        &db,
        &format!(
            "insert into delays (flight_id, reason, minutes_delayed, updated_at)
             values ({broken}, 'Crew', 30, 'yesterday')"
        ),
    );
    let state = AppState::new(db);

    let resp = send(&state, Method::GET, "/");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"class="notice warning" id="status-pass""#));
    assert!(body.contains("<strong>1</strong> flight(s) updated, <strong>1</strong> failed."));
    assert!(!body.contains("Database error:"));
    assert_eq!(flight_status(&state.db, boarding), FlightStatus::Boarding);
}

#[test]
fn overview_survives_failed_pass_and_queries() {
    let db = init_test_db();
    let net = seed_network(&db);
    let now = Utc::now();
    insert_flight(&db, &net, "BT671", now + Duration::minutes(15), now + Duration::hours(3), FlightStatus::Scheduled);
    exec_sql(&db, "alter table flights rename to flights_archive");
    let state = AppState::new(db);

    let resp = send(&state, Method::GET, "/");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Status update failed: Database Error:"));
    assert!(body.contains("Database error: overview counts:"));
    assert!(body.contains("Database error: status breakdown:"));
    assert!(body.contains("Database error: recent flights:"));
    assert!(body.contains("Total Flights"));
    assert!(body.contains("No flights to show."));
}

#[test]
fn unknown_route_is_not_found() {
    let state = AppState::new(init_test_db());
    let req = http::Request::builder()
        .method(Method::GET)
        .uri("/passengers/42")
        .body(astra::Body::empty())
        .unwrap();

    let err = crate::router::handle(req, &state).unwrap_err();

    assert!(matches!(err, crate::errors::ServerError::NotFound));
    let resp = crate::responses::error_to_response(err);
    assert_eq!(resp.status(), 404);
}
