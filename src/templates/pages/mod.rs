pub mod error;
pub mod flights;
pub mod overview;

pub use error::error_page;
pub use flights::{flights_page, FlightsVm};
pub use overview::{overview_page, OverviewVm};
