//! Billing period value object (year + month).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A monthly billing period.
///
/// Ordering is year-major: (2024, 12) < (2025, 1) < (2025, 3). This is the
/// order the report engine uses to find the most recent paid period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillingPeriod {
    pub year: i32,
    pub month: u32,
}

impl BillingPeriod {
    /// Creates a billing period, validating the month.
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, month as i32));
        }
        if !(2000..=2100).contains(&year) {
            return Err(ValidationError::out_of_range("year", 2000, 2100, year));
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for BillingPeriod {
    /// Formats as `month/year`, e.g. `3/2025`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// Optional year/month filter applied to contribution queries before the
/// report join. A month filter without a year matches that month in any year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl PeriodFilter {
    /// Filter matching every period.
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether a period passes this filter.
    pub fn matches(&self, period: &BillingPeriod) -> bool {
        self.year.map_or(true, |y| y == period.year)
            && self.month.map_or(true, |m| m == period.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(year: i32, month: u32) -> BillingPeriod {
        BillingPeriod::new(year, month).unwrap()
    }

    #[test]
    fn validates_month_range() {
        assert!(BillingPeriod::new(2025, 0).is_err());
        assert!(BillingPeriod::new(2025, 13).is_err());
        assert!(BillingPeriod::new(2025, 12).is_ok());
    }

    #[test]
    fn orders_year_major() {
        assert!(p(2024, 12) < p(2025, 1));
        assert!(p(2025, 1) < p(2025, 3));
        assert_eq!([p(2025, 2), p(2024, 12), p(2025, 1)].iter().max(), Some(&p(2025, 2)));
    }

    #[test]
    fn displays_month_slash_year() {
        assert_eq!(p(2025, 3).to_string(), "3/2025");
    }

    #[test]
    fn filter_matches_year_and_month_independently() {
        let filter = PeriodFilter { year: Some(2025), month: None };
        assert!(filter.matches(&p(2025, 7)));
        assert!(!filter.matches(&p(2024, 7)));

        let filter = PeriodFilter { year: Some(2025), month: Some(3) };
        assert!(filter.matches(&p(2025, 3)));
        assert!(!filter.matches(&p(2025, 4)));

        assert!(PeriodFilter::all().matches(&p(2024, 1)));
    }
}
