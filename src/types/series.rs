//! Series identifiers as sent to the Valet observations endpoint.

use crate::error::ValetError;
use serde::Deserialize;

/// An ordered, non-empty list of Valet series codes (e.g. `"V39079"` for the
/// policy interest rate).
///
/// The order is significant: result columns follow it. Construct one from a
/// single code, a comma-joined string, or any list of codes:
///
/// ```
/// use valet::SeriesCodes;
///
/// let single = SeriesCodes::from("V39079");
/// let many = SeriesCodes::from(["V122530", "V122531"]);
/// let joined = SeriesCodes::from("V122530,V122531");
///
/// assert_eq!(single.joined(), "V39079");
/// assert_eq!(many.joined(), "V122530,V122531");
/// assert_eq!(joined, many);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesCodes(Vec<String>);

impl SeriesCodes {
    /// The individual codes, in request order.
    pub fn codes(&self) -> &[String] {
        &self.0
    }

    /// The comma-joined form used in the request path.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that there is at least one code and that no code is blank.
    pub(crate) fn validate(&self) -> Result<(), ValetError> {
        if self.0.is_empty() {
            return Err(ValetError::EmptySeriesList);
        }
        match self.0.iter().position(|code| code.trim().is_empty()) {
            Some(index) => Err(ValetError::EmptySeriesCode { index }),
            None => Ok(()),
        }
    }
}

/// Splits every input on `,`, so `"A,B"` and `["A", "B"]` name the same two series.
fn split_codes<I, S>(codes: I) -> SeriesCodes
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SeriesCodes(
        codes
            .into_iter()
            .flat_map(|code| {
                code.as_ref()
                    .split(',')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect(),
    )
}

impl From<&str> for SeriesCodes {
    fn from(code: &str) -> Self {
        split_codes([code])
    }
}

impl From<String> for SeriesCodes {
    fn from(code: String) -> Self {
        split_codes([code])
    }
}

impl From<Vec<String>> for SeriesCodes {
    fn from(codes: Vec<String>) -> Self {
        split_codes(codes)
    }
}

impl From<Vec<&str>> for SeriesCodes {
    fn from(codes: Vec<&str>) -> Self {
        split_codes(codes)
    }
}

impl From<&[&str]> for SeriesCodes {
    fn from(codes: &[&str]) -> Self {
        split_codes(codes)
    }
}

impl<const N: usize> From<[&str; N]> for SeriesCodes {
    fn from(codes: [&str; N]) -> Self {
        split_codes(codes)
    }
}

/// Metadata the Valet API returns for each series in `seriesDetail`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeriesDetail {
    /// Series code; filled in from the `seriesDetail` key.
    #[serde(skip)]
    pub code: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_code_is_not_split() {
        let codes = SeriesCodes::from("FXUSDCAD");
        assert_eq!(codes.codes(), ["FXUSDCAD"]);
        assert_eq!(codes.joined(), "FXUSDCAD");
    }

    #[test]
    fn comma_joined_string_is_split() {
        let codes = SeriesCodes::from("IEXE0124,V122530");
        assert_eq!(codes.codes(), ["IEXE0124", "V122530"]);
        assert_eq!(codes.joined(), "IEXE0124,V122530");

        let owned = SeriesCodes::from(String::from("A,B,C"));
        assert_eq!(owned.len(), 3);
    }

    #[test]
    fn trailing_comma_leaves_a_blank_code() {
        let codes = SeriesCodes::from("A,");
        assert!(matches!(
            codes.validate(),
            Err(ValetError::EmptySeriesCode { index: 1 })
        ));
    }

    #[test]
    fn list_keeps_request_order() {
        let codes = SeriesCodes::from(vec!["V122531", "IEXE0124", "V122530"]);
        assert_eq!(codes.codes(), ["V122531", "IEXE0124", "V122530"]);
        assert_eq!(codes.joined(), "V122531,IEXE0124,V122530");
        assert_eq!(codes.len(), 3);
    }

    #[test]
    fn empty_list_is_rejected() {
        let codes = SeriesCodes::from(Vec::<String>::new());
        assert!(matches!(codes.validate(), Err(ValetError::EmptySeriesList)));
    }

    #[test]
    fn blank_code_is_rejected_with_position() {
        let codes = SeriesCodes::from(["A", " ", "B"]);
        assert!(matches!(
            codes.validate(),
            Err(ValetError::EmptySeriesCode { index: 1 })
        ));
    }
}
