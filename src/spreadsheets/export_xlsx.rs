use crate::domain::FlightRow;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 9] = [
    "Flight",
    "Airline",
    "IATA",
    "Origin",
    "Destination",
    "Departure (UTC)",
    "Arrival (UTC)",
    "Status",
    "Latest Delay (min)",
];

/// Builds the flights workbook in memory.
pub fn build_flights_workbook(flights: &[FlightRow]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, flight) in flights.iter().enumerate() {
        let r = (i + 1) as u32;
        let text_cells = [
            flight.flight_number.clone(),
            flight.airline_name.clone(),
            flight.airline_code.clone(),
            flight.origin.clone().unwrap_or_default(),
            flight.destination.clone().unwrap_or_default(),
            flight.departure_time.format("%Y-%m-%d %H:%M").to_string(),
            flight.arrival_time.format("%Y-%m-%d %H:%M").to_string(),
            flight.status.to_string(),
        ];

        for (col, value) in text_cells.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value)
                .map_err(|e| {
                    ServerError::XlsxError(format!("Failed to write {}: {e}", HEADERS[col]))
                })?;
        }

        if let Some(minutes) = flight.latest_delay_minutes {
            worksheet
                .write_number(r, 8, minutes as f64)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write delay: {e}")))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_flights_xlsx(flights: &[FlightRow]) -> ResultResp {
    let buffer = build_flights_workbook(flights)?;
    xlsx_response(buffer, "flights.xlsx")
}
