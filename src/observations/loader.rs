use crate::observations::error::ObservationsError;
use crate::observations::extractor::parse_observations;
use crate::types::observation_frame::ObservationFrame;
use crate::types::query_date::QueryDate;
use crate::types::series::SeriesCodes;
use log::{debug, info, warn};
use reqwest::Client;

pub struct ObservationLoader {
    base_url: String,
    download_client: Client,
}

impl ObservationLoader {
    pub fn new(base_url: &str, download_client: Client) -> ObservationLoader {
        ObservationLoader {
            base_url: base_url.trim_end_matches('/').to_string(),
            download_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn observations_url(&self, series: &SeriesCodes) -> String {
        format!("{}/observations/{}/json", self.base_url, series.joined())
    }

    /// Issues the single GET for `series` and builds the result frame.
    pub async fn get_frame(
        &self,
        series: &SeriesCodes,
        start_date: Option<&QueryDate>,
        end_date: Option<&QueryDate>,
    ) -> Result<ObservationFrame, ObservationsError> {
        let body = self.download(series, start_date, end_date).await?;
        parse_observations(&body, series)
    }

    async fn download(
        &self,
        series: &SeriesCodes,
        start_date: Option<&QueryDate>,
        end_date: Option<&QueryDate>,
    ) -> Result<Vec<u8>, ObservationsError> {
        let url = self.observations_url(series);

        let mut params: Vec<(&str, &str)> = Vec::with_capacity(2);
        if let Some(start) = start_date {
            params.push(("start_date", start.as_str()));
        }
        if let Some(end) = end_date {
            params.push(("end_date", end.as_str()));
        }

        info!("Requesting observations for {} from {}", series.joined(), url);
        let mut request = self.download_client.get(&url);
        if !params.is_empty() {
            debug!("Query parameters: {:?}", params);
            request = request.query(&params);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ObservationsError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ObservationsError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ObservationsError::NetworkRequest(url, e)
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ObservationsError::NetworkRequest(url.clone(), e))?;
        info!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
