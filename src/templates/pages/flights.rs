use crate::domain::{FlightRow, FlightStatus};
use crate::templates::{desktop_layout, flights_table};
use maud::{html, Markup};

pub struct FlightsVm {
    pub flights: Vec<FlightRow>,
    pub filter: Option<FlightStatus>,
}

pub fn flights_page(vm: &FlightsVm) -> Markup {
    desktop_layout(
        "Flights",
        html! {
            main class="container" {
                h1 { "🛫 Flights" }

                form action="/flights" method="get" style="display: flex; gap: 10px; align-items: center;" {
                    label for="status" { "Status" }
                    select name="status" id="status" {
                        option value="" selected[vm.filter.is_none()] { "All" }
                        @for status in FlightStatus::ALL {
                            option value=(status.as_str()) selected[vm.filter == Some(status)] { (status.as_str()) }
                        }
                    }
                    button type="submit" { "Filter" }
                    a href="/flights/export.xlsx" { "Download XLSX" }
                }

                p { (vm.flights.len()) " flight(s)" }
                (flights_table(&vm.flights))
            }
        },
    )
}
