//! Calendar months and month ranges.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

const MONTH_LABELS: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Earliest year accepted for reporting.
pub const MIN_YEAR: i32 = 1900;
/// Latest year accepted for reporting.
pub const MAX_YEAR: i32 = 9998;

/// A calendar month, serialized as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a validated calendar month.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidMonth` for months outside 1..=12 and
    /// `PeriodError::InvalidYear` for years outside the supported range.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PeriodError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `date`.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidYear` if the date's year is unsupported.
    pub fn from_date(date: NaiveDate) -> Result<Self, PeriodError> {
        Self::new(date.year(), date.month())
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1 to 12.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The same month one year earlier.
    #[must_use]
    pub const fn previous_year(&self) -> Self {
        Self {
            year: self.year - 1,
            month: self.month,
        }
    }

    /// The following month.
    #[must_use]
    pub const fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Number of days in this month.
    #[must_use]
    pub const fn days_in_month(&self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days_in_month())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns true if `date` falls within this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Display label, e.g. `Janvier 2025`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_LABELS[(self.month - 1) as usize], self.year)
    }

    fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PeriodError::InvalidYearMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// An inclusive range of calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    start: YearMonth,
    end: YearMonth,
}

impl MonthRange {
    /// Creates a range from `start` through `end`.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidRange` if `start` is after `end`.
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range and enforces a maximum length in months.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidRange` if `start` is after `end`, or
    /// `PeriodError::RangeTooLong` if the range spans more than `max_months`.
    pub fn bounded(start: YearMonth, end: YearMonth, max_months: u32) -> Result<Self, PeriodError> {
        let range = Self::new(start, end)?;
        let months = range.len();
        if months > max_months {
            return Err(PeriodError::RangeTooLong {
                months,
                max: max_months,
            });
        }
        Ok(range)
    }

    /// The whole calendar year `year`.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidYear` if the year is unsupported.
    pub fn calendar_year(year: i32) -> Result<Self, PeriodError> {
        Self::new(YearMonth::new(year, 1)?, YearMonth::new(year, 12)?)
    }

    /// First month of the range.
    #[must_use]
    pub const fn start(&self) -> YearMonth {
        self.start
    }

    /// Last month of the range.
    #[must_use]
    pub const fn end(&self) -> YearMonth {
        self.end
    }

    /// Number of months in the range.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        u32::try_from(self.end.ordinal() - self.start.ordinal() + 1).unwrap_or(u32::MAX)
    }

    /// Months of the range in ascending order.
    #[must_use]
    pub fn months(&self) -> Vec<YearMonth> {
        let mut months = Vec::with_capacity(self.len() as usize);
        let mut current = self.start;
        while current <= self.end {
            months.push(current);
            current = current.succ();
        }
        months
    }

    /// The same range shifted one year back.
    #[must_use]
    pub const fn previous_year(&self) -> Self {
        Self {
            start: self.start.previous_year(),
            end: self.end.previous_year(),
        }
    }

    /// First and last calendar day covered by the range.
    #[must_use]
    pub fn date_bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.start.first_day(), self.end.last_day())
    }

    /// Returns true if `month` lies within the range.
    #[must_use]
    pub fn contains(&self, month: YearMonth) -> bool {
        self.start <= month && month <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[rstest]
    #[case(2025, 1, 31)]
    #[case(2025, 2, 28)]
    #[case(2024, 2, 29)]
    #[case(1900, 2, 28)]
    #[case(2000, 2, 29)]
    #[case(2025, 4, 30)]
    #[case(2025, 12, 31)]
    fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] days: u32) {
        assert_eq!(ym(year, month).days_in_month(), days);
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert_eq!(YearMonth::new(2025, 13), Err(PeriodError::InvalidMonth(13)));
        assert_eq!(YearMonth::new(2025, 0), Err(PeriodError::InvalidMonth(0)));
        assert_eq!(YearMonth::new(1800, 1), Err(PeriodError::InvalidYear(1800)));
    }

    #[test]
    fn test_parse_and_display() {
        let month: YearMonth = "2025-03".parse().unwrap();
        assert_eq!(month, ym(2025, 3));
        assert_eq!(month.to_string(), "2025-03");
        assert!("2025".parse::<YearMonth>().is_err());
        assert!("2025-xx".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_serde_uses_year_month_string() {
        let json = serde_json::to_string(&ym(2025, 7)).unwrap();
        assert_eq!(json, "\"2025-07\"");
        let parsed: YearMonth = serde_json::from_str("\"2024-02\"").unwrap();
        assert_eq!(parsed, ym(2024, 2));
        assert!(serde_json::from_str::<YearMonth>("\"2024-13\"").is_err());
    }

    #[test]
    fn test_label_is_french() {
        assert_eq!(ym(2025, 1).label(), "Janvier 2025");
        assert_eq!(ym(2024, 8).label(), "Août 2024");
    }

    #[test]
    fn test_succ_wraps_year() {
        assert_eq!(ym(2024, 12).succ(), ym(2025, 1));
        assert_eq!(ym(2025, 5).succ(), ym(2025, 6));
    }

    #[test]
    fn test_range_months_and_len() {
        let range = MonthRange::new(ym(2024, 11), ym(2025, 2)).unwrap();
        assert_eq!(range.len(), 4);
        assert_eq!(
            range.months(),
            vec![ym(2024, 11), ym(2024, 12), ym(2025, 1), ym(2025, 2)]
        );
        assert_eq!(
            range.date_bounds(),
            (
                NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
            )
        );
    }

    #[test]
    fn test_range_previous_year() {
        let range = MonthRange::calendar_year(2025).unwrap().previous_year();
        assert_eq!(range.start(), ym(2024, 1));
        assert_eq!(range.end(), ym(2024, 12));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = MonthRange::new(ym(2025, 3), ym(2025, 1)).unwrap_err();
        assert!(matches!(err, PeriodError::InvalidRange { .. }));
    }

    #[test]
    fn test_bounded_range_rejects_long_ranges() {
        assert!(MonthRange::bounded(ym(2024, 1), ym(2025, 12), 24).is_ok());
        assert_eq!(
            MonthRange::bounded(ym(2024, 1), ym(2026, 1), 24),
            Err(PeriodError::RangeTooLong { months: 25, max: 24 })
        );
    }

    #[test]
    fn test_contains_date() {
        let month = ym(2025, 2);
        assert!(month.contains(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()));
    }
}
