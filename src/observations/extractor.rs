//! Turns an observations response body into an [`ObservationFrame`].

use crate::observations::error::ObservationsError;
use crate::types::cell::Cell;
use crate::types::observation_frame::ObservationFrame;
use crate::types::series::{SeriesCodes, SeriesDetail};
use chrono::NaiveDate;
use log::{info, warn};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    #[serde(rename = "seriesDetail", default)]
    series_detail: HashMap<String, SeriesDetail>,
    observations: Vec<RawObservation>,
}

#[derive(Debug, Deserialize)]
struct RawObservation {
    d: String,
    #[serde(flatten)]
    cells: HashMap<String, Cell>,
}

/// Parses a Valet observations JSON body and projects it onto `series`.
///
/// The resulting frame has a `date` column followed by exactly one column per
/// requested series, in request order. Any other keys in the response are
/// dropped.
///
/// # Errors
///
/// * [`ObservationsError::JsonParse`] if the body is not JSON, has no
///   `observations` array, or holds a non-numeric value.
/// * [`ObservationsError::DateParse`] if an observation date is not `YYYY-MM-DD`.
/// * [`ObservationsError::MissingSeries`] if the response has observations but
///   never mentions one of the requested series.
pub fn parse_observations(
    body: &[u8],
    series: &SeriesCodes,
) -> Result<ObservationFrame, ObservationsError> {
    let response: ObservationsResponse = serde_json::from_slice(body)?;
    build_frame(response, series)
}

fn build_frame(
    response: ObservationsResponse,
    series: &SeriesCodes,
) -> Result<ObservationFrame, ObservationsError> {
    let ObservationsResponse {
        series_detail,
        observations,
    } = response;

    if !observations.is_empty() {
        if let Some(missing) = series.codes().iter().find(|code| {
            !series_detail.contains_key(*code)
                && !observations.iter().any(|obs| obs.cells.contains_key(*code))
        }) {
            warn!("Series {} not present in observations response", missing);
            return Err(ObservationsError::MissingSeries {
                series: missing.clone(),
            });
        }
    }

    let dates = observations
        .iter()
        .map(|obs| {
            NaiveDate::parse_from_str(&obs.d, "%Y-%m-%d").map_err(|e| {
                ObservationsError::DateParse {
                    value: obs.d.clone(),
                    source: e,
                }
            })
        })
        .collect::<Result<Vec<NaiveDate>, _>>()?;

    let mut columns = Vec::with_capacity(series.len() + 1);
    columns.push(Column::from(Series::new("date".into(), dates)));
    for code in series.codes() {
        let values: Vec<Option<f64>> = observations
            .iter()
            .map(|obs| obs.cells.get(code).and_then(|cell| cell.value()))
            .collect();
        columns.push(Column::from(Series::new(code.as_str().into(), values)));
    }
    let frame = DataFrame::new(columns)?;

    let details = series
        .codes()
        .iter()
        .filter_map(|code| {
            series_detail.get(code).map(|detail| SeriesDetail {
                code: code.clone(),
                ..detail.clone()
            })
        })
        .collect();

    info!(
        "Parsed {} observations for {} series",
        frame.height(),
        series.len()
    );
    Ok(ObservationFrame::new(frame, details))
}
