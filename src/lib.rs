mod error;
mod observations;
#[cfg(test)]
mod test_server;
mod types;
mod valet;

pub use error::ValetError;
pub use valet::*;

pub use observations::error::ObservationsError;
pub use observations::extractor::parse_observations;

pub use types::cell::Cell;
pub use types::observation_frame::ObservationFrame;
pub use types::query_date::QueryDate;
pub use types::series::{SeriesCodes, SeriesDetail};
