//! Contains the `ObservationFrame` returned by [`crate::Valet::observations`].

use crate::observations::error::ObservationsError;
use crate::types::series::SeriesDetail;
use chrono::NaiveDate;
use polars::prelude::{col, lit, DataFrame, Expr, IntoLazy};

/// The result table of an observations request.
///
/// The wrapped `DataFrame` always has a `date` column (Polars `Date`) followed
/// by one `Float64` column per requested series, in request order. Missing
/// observations are nulls. Rows are in the order the API returned them.
///
/// # Example
///
/// ```no_run
/// # use valet::{Valet, ValetError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), ValetError> {
/// let valet = Valet::new();
/// let rates = valet
///     .observations()
///     .series(["V39079", "V122531"])
///     .start_date("2020-01-01")
///     .call()
///     .await?;
///
/// println!("{}", rates.head(5).frame);
/// if let Some((first, last)) = rates.date_bounds()? {
///     println!("{first} .. {last}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ObservationFrame {
    /// The underlying Polars DataFrame.
    pub frame: DataFrame,
    details: Vec<SeriesDetail>,
}

impl ObservationFrame {
    pub(crate) fn new(frame: DataFrame, details: Vec<SeriesDetail>) -> Self {
        Self { frame, details }
    }

    pub fn into_inner(self) -> DataFrame {
        self.frame
    }

    /// All column names, `date` first.
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// The series codes of the value columns, in column order.
    pub fn series_codes(&self) -> Vec<String> {
        self.column_names().into_iter().skip(1).collect()
    }

    /// Series metadata from the response, for the requested series that had any.
    pub fn details(&self) -> &[SeriesDetail] {
        &self.details
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> ObservationFrame {
        ObservationFrame::new(self.frame.head(Some(n)), self.details.clone())
    }

    /// All dates of the table, in row order.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, ObservationsError> {
        let column = self
            .frame
            .column("date")
            .map_err(|e| ObservationsError::ColumnNotFound("date".to_string(), e))?;
        Ok(column
            .as_materialized_series()
            .date()?
            .as_date_iter()
            .flatten()
            .collect())
    }

    /// Earliest and latest date of the table, or `None` when it has no rows.
    pub fn date_bounds(&self) -> Result<Option<(NaiveDate, NaiveDate)>, ObservationsError> {
        let dates = self.dates()?;
        Ok(dates.iter().min().copied().zip(dates.iter().max().copied()))
    }

    /// The values of one series, with `None` for missing observations.
    pub fn values(&self, series: &str) -> Result<Vec<Option<f64>>, ObservationsError> {
        let column = self
            .frame
            .column(series)
            .map_err(|e| ObservationsError::ColumnNotFound(series.to_string(), e))?;
        Ok(column.as_materialized_series().f64()?.into_iter().collect())
    }

    /// Filters rows with a Polars predicate.
    pub fn filter(&self, predicate: Expr) -> Result<ObservationFrame, ObservationsError> {
        let frame = self.frame.clone().lazy().filter(predicate).collect()?;
        Ok(ObservationFrame::new(frame, self.details.clone()))
    }

    /// Rows with `start <= date <= end`.
    pub fn get_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ObservationFrame, ObservationsError> {
        self.filter(
            col("date")
                .gt_eq(lit(start))
                .and(col("date").lt_eq(lit(end))),
        )
    }
}
