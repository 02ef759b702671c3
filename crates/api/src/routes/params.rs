//! Request parameter parsing shared by the route modules.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use chaff_core::normalize::{AmountInputError, parse_amount_input};
use chaff_core::periods::{MAX_YEAR, MIN_YEAR, MonthRange, PeriodError, YearMonth};

use crate::error::{ApiError, ApiResult};

/// Amount as sent by a client: typed text such as `3'110.79`, or a JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// Free-form text.
    Text(String),
    /// Plain JSON number.
    Number(serde_json::Number),
}

impl RawAmount {
    /// Normalizes and validates the amount.
    pub fn parse(&self) -> Result<Decimal, AmountInputError> {
        match self {
            Self::Text(text) => parse_amount_input(text),
            Self::Number(number) => parse_amount_input(&number.to_string()),
        }
    }
}

/// Query parameters selecting a report range.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    /// First month, `YYYY-MM`; defaults to January of the current year.
    pub from: Option<String>,
    /// Last month, `YYYY-MM`; defaults to December of the current year.
    pub to: Option<String>,
    /// Year shown in the table headers; defaults to the year of `to`.
    pub display_year: Option<i32>,
    /// Restricts consolidated reports to one mandate type.
    pub mandate_type: Option<String>,
}

impl RangeQuery {
    /// Resolves the requested month range, enforcing `max_months`.
    pub fn month_range(&self, max_months: u32) -> ApiResult<MonthRange> {
        let this_year = Utc::now().year();
        let start = match self.from.as_deref() {
            Some(from) => from.parse::<YearMonth>()?,
            None => YearMonth::new(this_year, 1)?,
        };
        let end = match self.to.as_deref() {
            Some(to) => to.parse::<YearMonth>()?,
            None => YearMonth::new(start.year().max(this_year), 12)?,
        };
        Ok(MonthRange::bounded(start, end, max_months)?)
    }

    /// Year to label the current-year columns with.
    pub fn display_year(&self, range: &MonthRange) -> ApiResult<i32> {
        let year = self.display_year.unwrap_or_else(|| range.end().year());
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PeriodError::InvalidYear(year).into());
        }
        Ok(year)
    }

    /// Normalized mandate type filter; blank means none.
    pub fn mandate_type(&self) -> Option<&str> {
        self.mandate_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Parses a `YYYY-MM-DD` date key.
pub fn parse_date_key(key: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .map_err(|_| ApiError::validation(format!("Invalid date: {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_raw_amount_accepts_text_and_numbers() {
        let text: RawAmount = serde_json::from_str("\"3'110,79\"").unwrap();
        assert_eq!(text.parse(), Ok(dec!(3110.79)));

        let number: RawAmount = serde_json::from_str("1250.5").unwrap();
        assert_eq!(number.parse(), Ok(dec!(1250.5)));

        let negative: RawAmount = serde_json::from_str("-3").unwrap();
        assert_eq!(negative.parse(), Err(AmountInputError::Negative));
    }

    #[test]
    fn test_month_range_from_query() {
        let query = RangeQuery {
            from: Some("2024-11".to_string()),
            to: Some("2025-02".to_string()),
            ..RangeQuery::default()
        };

        let range = query.month_range(36).unwrap();

        assert_eq!(range.len(), 4);
        assert_eq!(query.display_year(&range).unwrap(), 2025);
    }

    #[test]
    fn test_month_range_rejects_bad_input() {
        let inverted = RangeQuery {
            from: Some("2025-06".to_string()),
            to: Some("2025-01".to_string()),
            ..RangeQuery::default()
        };
        assert!(inverted.month_range(36).is_err());

        let malformed = RangeQuery {
            from: Some("June".to_string()),
            ..RangeQuery::default()
        };
        assert!(malformed.month_range(36).is_err());

        let too_long = RangeQuery {
            from: Some("2020-01".to_string()),
            to: Some("2025-12".to_string()),
            ..RangeQuery::default()
        };
        assert!(too_long.month_range(36).is_err());
    }

    #[test]
    fn test_display_year_out_of_bounds_rejected() {
        let range = MonthRange::calendar_year(2025).unwrap();
        let query = RangeQuery {
            display_year: Some(i32::MIN),
            ..RangeQuery::default()
        };
        assert!(query.display_year(&range).is_err());

        let query = RangeQuery {
            display_year: Some(2024),
            ..RangeQuery::default()
        };
        assert_eq!(query.display_year(&range).unwrap(), 2024);
    }

    #[test]
    fn test_default_range_is_current_year() {
        let range = RangeQuery::default().month_range(36).unwrap();
        assert_eq!(range.len(), 12);
        assert_eq!(range.start().year(), Utc::now().year());
    }

    #[test]
    fn test_blank_mandate_type_is_ignored() {
        let query = RangeQuery {
            mandate_type: Some("  ".to_string()),
            ..RangeQuery::default()
        };
        assert_eq!(query.mandate_type(), None);
    }

    #[test]
    fn test_parse_date_key() {
        assert_eq!(
            parse_date_key("2025-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert!(parse_date_key("2025-02-30").is_err());
        assert!(parse_date_key("31.01.2025").is_err());
    }
}
