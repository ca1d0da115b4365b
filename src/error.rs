use crate::observations::error::ObservationsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValetError {
    #[error(transparent)]
    Observations(#[from] ObservationsError),

    #[error("At least one series code is required")]
    EmptySeriesList,

    #[error("Series code at position {index} is empty")]
    EmptySeriesCode { index: usize },
}
