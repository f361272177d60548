use crate::domain::{FlightRow, FlightStatus};
use maud::{html, Markup};

pub mod card;

pub use card::card;

pub fn metric(label: &str, value: i64) -> Markup {
    html! {
        div class="metric" {
            div class="label" { (label) }
            div class="value" { (value) }
        }
    }
}

pub fn status_badge(status: FlightStatus) -> Markup {
    html! {
        span class=(format!("badge badge-{}", status.slug())) { (status.as_str()) }
    }
}

pub fn flights_table(flights: &[FlightRow]) -> Markup {
    html! {
        @if flights.is_empty() {
            p { "No flights to show." }
        } @else {
            div style="overflow-x: auto;" {
                table {
                    thead {
                        tr {
                            th { "Flight" }
                            th { "Airline" }
                            th { "Route" }
                            th { "Departure (UTC)" }
                            th { "Arrival (UTC)" }
                            th { "Status" }
                            th { "Delay" }
                        }
                    }
                    tbody {
                        @for flight in flights {
                            tr id=(format!("flight-{}", flight.id)) {
                                td { (flight.flight_number) }
                                td { (flight.airline_name) " (" (flight.airline_code) ")" }
                                td { (flight.route_label()) }
                                td { (flight.departure_time.format("%Y-%m-%d %H:%M").to_string()) }
                                td { (flight.arrival_time.format("%Y-%m-%d %H:%M").to_string()) }
                                td { (status_badge(flight.status)) }
                                td {
                                    @match flight.latest_delay_minutes {
                                        Some(m) => { (m) " min" }
                                        None => "-",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
