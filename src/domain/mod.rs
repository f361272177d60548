pub mod flight;
pub mod logic;
pub mod status;

pub use flight::{DelayRecord, FlightRow, FlightSnapshot};
pub use logic::next_status;
pub use status::FlightStatus;
