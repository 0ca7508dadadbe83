//! Defines [`ViewKey`], the tuple of inputs that fully determines what the
//! pollutant analysis view should display.

use crate::types::error::ViewKeyError;
use crate::types::pollutant::Pollutant;
use crate::types::time_filter::TimeFilter;
use std::fmt;

/// Identifies exactly what the chart's data request depends on.
///
/// The month is validated on construction, so every `ViewKey` in circulation
/// has `1 <= month <= 12`.
///
/// # Examples
///
/// ```
/// use airsight::{Pollutant, TimeFilter, ViewKey};
///
/// let key = ViewKey::new(2025, 8, Pollutant::Pm25, TimeFilter::Daily).unwrap();
/// let weekly = key.with_filter(TimeFilter::Weekly);
/// assert!(key.same_month(&weekly));
///
/// assert!(ViewKey::new(2025, 13, Pollutant::Pm25, TimeFilter::Daily).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewKey {
    year: i32,
    month: u32,
    pollutant: Pollutant,
    filter: TimeFilter,
}

impl ViewKey {
    pub fn new(
        year: i32,
        month: u32,
        pollutant: Pollutant,
        filter: TimeFilter,
    ) -> Result<Self, ViewKeyError> {
        if !(1..=12).contains(&month) {
            return Err(ViewKeyError::MonthOutOfRange(month));
        }
        Ok(Self {
            year,
            month,
            pollutant,
            filter,
        })
    }

    /// Parses a key from the raw strings found in a query string or form.
    pub fn parse(
        year: i32,
        month: u32,
        pollutant: &str,
        filter: &str,
    ) -> Result<Self, ViewKeyError> {
        Self::new(year, month, pollutant.parse()?, filter.parse()?)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn pollutant(&self) -> Pollutant {
        self.pollutant
    }

    pub fn filter(&self) -> TimeFilter {
        self.filter
    }

    pub fn with_filter(self, filter: TimeFilter) -> Self {
        Self { filter, ..self }
    }

    pub fn with_pollutant(self, pollutant: Pollutant) -> Self {
        Self { pollutant, ..self }
    }

    pub fn with_date(self, year: i32, month: u32) -> Result<Self, ViewKeyError> {
        Self::new(year, month, self.pollutant, self.filter)
    }

    /// Whether both keys point at the same calendar month.
    pub fn same_month(&self, other: &ViewKey) -> bool {
        self.year == other.year && self.month == other.month
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02} {} {}",
            self.year, self.month, self.pollutant, self.filter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_month_zero() {
        assert_eq!(
            ViewKey::new(2025, 0, Pollutant::O3, TimeFilter::Hourly),
            Err(ViewKeyError::MonthOutOfRange(0))
        );
    }

    #[test]
    fn test_parse_from_raw_strings() {
        let key = ViewKey::parse(2024, 2, "no2", "WEEKLY").unwrap();
        assert_eq!(key.pollutant(), Pollutant::No2);
        assert_eq!(key.filter(), TimeFilter::Weekly);
        assert_eq!(key.to_string(), "2024-02 NO2 weekly");
    }

    #[test]
    fn test_with_date_validates() {
        let key = ViewKey::new(2025, 8, Pollutant::Pm25, TimeFilter::Daily).unwrap();
        assert!(key.with_date(2025, 14).is_err());
        let moved = key.with_date(2026, 1).unwrap();
        assert!(!moved.same_month(&key));
        assert_eq!(moved.pollutant(), Pollutant::Pm25);
    }
}
