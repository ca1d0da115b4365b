//! This module provides the main entry point for the Valet client.
//! It fetches observations for one or more series from the Bank of Canada
//! Valet API and returns them as a Polars-backed [`ObservationFrame`].

use crate::error::ValetError;
use crate::observations::loader::ObservationLoader;
use crate::types::observation_frame::ObservationFrame;
use crate::types::query_date::QueryDate;
use crate::types::series::SeriesCodes;
use bon::bon;
use reqwest::Client;

/// Root of the public Valet API.
pub const DEFAULT_BASE_URL: &str = "https://www.bankofcanada.ca/valet";

/// The main client struct for accessing Valet observations.
///
/// Every call to [`Valet::observations`] issues exactly one GET request; the
/// client keeps no state between calls apart from its HTTP connection pool.
///
/// # Examples
///
/// ```rust
/// # use valet::Valet;
/// // Against the public API
/// let valet = Valet::new();
///
/// // Against a mirror or a local test server
/// let mirror = Valet::with_base_url("http://localhost:8080/valet");
/// assert_eq!(mirror.base_url(), "http://localhost:8080/valet");
/// ```
pub struct Valet {
    loader: ObservationLoader,
}

impl Default for Valet {
    fn default() -> Self {
        Self::new()
    }
}

#[bon]
impl Valet {
    /// Creates a client for the public Valet API at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client whose requests go to `base_url` instead of the public API.
    ///
    /// A trailing slash is ignored.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Creates a client that sends requests through a preconfigured
    /// `reqwest::Client`, e.g. one with a timeout or proxy settings.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            loader: ObservationLoader::new(base_url, client),
        }
    }

    pub fn base_url(&self) -> &str {
        self.loader.base_url()
    }

    /// Fetches observations for one or more series.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.series(impl Into<SeriesCodes>)`: **Required.** A single series code or an
    ///   ordered list of codes. Result columns follow this order.
    /// * `.start_date(impl Into<QueryDate>)`: Optional. First date to include
    ///   (`"YYYY-MM-DD"` or a `NaiveDate`). Not sent when omitted.
    /// * `.end_date(impl Into<QueryDate>)`: Optional. Last date to include. Not sent when omitted.
    ///
    /// # Returns
    ///
    /// An [`ObservationFrame`] with a `date` column followed by one `f64` column
    /// per requested series. Rows keep the order the API returned them in.
    ///
    /// # Errors
    ///
    /// * [`ValetError::EmptySeriesList`] / [`ValetError::EmptySeriesCode`] for invalid input,
    ///   before any request is made.
    /// * [`ValetError::Observations`] wrapping a network failure, a non-2xx status,
    ///   a malformed body, or a requested series that the response never mentions.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use valet::{Valet, ValetError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ValetError> {
    /// let valet = Valet::new();
    ///
    /// let usd_cad = valet
    ///     .observations()
    ///     .series("FXUSDCAD")
    ///     .start_date("2024-01-01")
    ///     .end_date("2024-01-31")
    ///     .call()
    ///     .await?;
    /// println!("{}", usd_cad.frame);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn observations(
        &self,
        #[builder(into)] series: SeriesCodes,
        #[builder(into)] start_date: Option<QueryDate>,
        #[builder(into)] end_date: Option<QueryDate>,
    ) -> Result<ObservationFrame, ValetError> {
        series.validate()?;
        let frame = self
            .loader
            .get_frame(&series, start_date.as_ref(), end_date.as_ref())
            .await?;
        Ok(frame)
    }
}
