use chrono::NaiveDate;

/// One bound of an observation date range, as sent in the `start_date` /
/// `end_date` query parameters.
///
/// Strings are forwarded verbatim; the API rejects malformed dates itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDate(String);

impl QueryDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QueryDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for QueryDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<NaiveDate> for QueryDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_date_is_iso_formatted() {
        let date = NaiveDate::from_ymd_opt(2010, 1, 4).unwrap();
        assert_eq!(QueryDate::from(date).as_str(), "2010-01-04");
    }

    #[test]
    fn strings_are_not_validated() {
        assert_eq!(QueryDate::from("yesterday").as_str(), "yesterday");
    }
}
