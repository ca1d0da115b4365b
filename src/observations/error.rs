use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservationsError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse observations JSON")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid observation date '{value}'")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Series '{series}' is not present in the response")]
    MissingSeries { series: String },

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
