use crate::db::overview::OverviewCounts;
use crate::domain::{FlightRow, FlightStatus};
use crate::engine::StatusUpdateReport;
use crate::templates::{card, desktop_layout, flights_table, metric, status_badge};
use maud::{html, Markup};

pub struct OverviewVm {
    pub counts: OverviewCounts,
    pub status_counts: Vec<(FlightStatus, i64)>,
    pub recent_flights: Vec<FlightRow>,
    /// Outcome of the status pass run for this render; `Err` carries the pass error.
    pub status_pass: Result<StatusUpdateReport, String>,
    /// One message per dashboard query that failed; its section renders empty.
    pub db_errors: Vec<String>,
}

pub fn overview_page(vm: &OverviewVm) -> Markup {
    desktop_layout(
        "Overview",
        html! {
            main class="container" {
                h1 { "📊 System Overview" }

                (status_pass_notice(&vm.status_pass))

                @for msg in &vm.db_errors {
                    p class="notice warning db-error" { "Database error: " (msg) }
                }

                div class="metrics" {
                    (metric("Total Flights", vm.counts.flights))
                    (metric("Total Passengers", vm.counts.passengers))
                    (metric("Airports", vm.counts.airports))
                    (metric("Airlines", vm.counts.airlines))
                }

                (card("Flight Status", html! {
                    table {
                        tbody {
                            @for (status, n) in &vm.status_counts {
                                tr {
                                    td { (status_badge(*status)) }
                                    td {
                                        a href=(format!("/flights?status={}", status.as_str())) { (n) }
                                    }
                                }
                            }
                        }
                    }
                }))

                (card("Recent Flights (last 24 hours)", flights_table(&vm.recent_flights)))
            }
        },
    )
}

fn status_pass_notice(pass: &Result<StatusUpdateReport, String>) -> Markup {
    html! {
        @match pass {
            Ok(report) if report.is_clean() => {
                p class="notice" id="status-pass" {
                    "Status update: " strong { (report.updated) } " flight(s) updated."
                }
            }
            Ok(report) => {
                p class="notice warning" id="status-pass" {
                    "Status update: " strong { (report.updated) } " flight(s) updated, "
                    strong { (report.failed.len()) } " failed."
                }
            }
            Err(msg) => {
                p class="notice warning" id="status-pass" { "Status update failed: " (msg) }
            }
        }
    }
}
