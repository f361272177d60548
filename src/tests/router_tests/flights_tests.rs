use super::{body_string, send};
use crate::app::AppState;
use crate::domain::FlightStatus;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    exec_sql, flight_status, init_test_db, insert_delay, insert_flight, seed_network,
};
use astra::Body;
use chrono::{Duration, Utc};
use http::{Method, Request};

fn seeded_state() -> AppState {
    let db = init_test_db();
    let net = seed_network(&db);
    let now = Utc::now();
    insert_flight(&db, &net, "BT100", now - Duration::hours(1), now + Duration::hours(1), FlightStatus::InFlight);
    insert_flight(&db, &net, "BT200", now + Duration::hours(6), now + Duration::hours(9), FlightStatus::Scheduled);
    AppState::new(db)
}

#[test]
fn flights_page_lists_all_flights() {
    let state = seeded_state();

    let resp = send(&state, Method::GET, "/flights");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("BT100"));
    assert!(body.contains("BT200"));
    assert!(body.contains("RIX → LHR"));
}

#[test]
fn flights_table_rows_are_anchored_by_id() {
    let db = init_test_db();
    let net = seed_network(&db);
    let now = Utc::now();
    let id = insert_flight(&db, &net, "BT150", now + Duration::hours(6), now + Duration::hours(9), FlightStatus::Scheduled);
    let state = AppState::new(db);

    let body = body_string(send(&state, Method::GET, "/flights"));

    assert!(body.contains(&format!(r#"<tr id="flight-{id}">"#)));
}

#[test]
fn flights_page_filters_by_encoded_status() {
    let state = seeded_state();

    let body = body_string(send(&state, Method::GET, "/flights?status=In+Flight"));

    assert!(body.contains("BT100"));
    assert!(!body.contains("BT200"));

    let body = body_string(send(&state, Method::GET, "/flights?status=In%20Flight"));
    assert!(body.contains("BT100"));
}

#[test]
fn unknown_status_filter_is_bad_request() {
    let state = seeded_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/flights?status=Diverted")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &state).unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn export_returns_xlsx_attachment() {
    let state = seeded_state();

    let resp = send(&state, Method::GET, "/flights/export.xlsx");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("flights.xlsx"));
}

#[test]
fn update_endpoint_reports_changes_as_json() {
    let db = init_test_db();
    let net = seed_network(&db);
    let now = Utc::now();
    let cancelled = insert_flight(&db, &net, "BT300", now + Duration::hours(5), now + Duration::hours(8), FlightStatus::Scheduled);
    insert_delay(&db, cancelled, 720, now);
    let state = AppState::new(db);

    let resp = send(&state, Method::POST, "/flights/update-statuses");

    assert_eq!(resp.status(), 200);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["updated"], 1);
    assert_eq!(json["failed"].as_array().map(Vec::len), Some(0));
    assert_eq!(flight_status(&state.db, cancelled), FlightStatus::Cancelled);
}

#[test]
fn update_endpoint_answers_multi_status_when_a_flight_fails() {
    let db = init_test_db();
    let net = seed_network(&db);
    let now = Utc::now();
    let boarding = insert_flight(&db, &net, "BT310", now + Duration::minutes(20), now + Duration::hours(3), FlightStatus::Scheduled);
    let broken = insert_flight(&db, &net, "BT311", now + Duration::hours(5), now + Duration::hours(8), FlightStatus::Scheduled);
    exec_sql(
        &db,
        &format!(
            "insert into delays (flight_id, reason, minutes_delayed, updated_at)
             values ({broken}, 'Crew', 30, 'yesterday')"
        ),
    );
    let state = AppState::new(db);

    let resp = send(&state, Method::POST, "/flights/update-statuses");

    assert_eq!(resp.status(), 207);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["updated"], 1);
    assert_eq!(json["failed"][0]["flight_id"], broken);
    assert_eq!(json["failed"][0]["flight_number"], "BT311");
    assert_eq!(flight_status(&state.db, boarding), FlightStatus::Boarding);
    assert_eq!(flight_status(&state.db, broken), FlightStatus::Scheduled);
}
