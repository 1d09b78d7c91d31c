//! Inclusive date range used as the report cache key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// An inclusive date range with the invariant `start <= end`.
///
/// Every report lookup and every generated metric record is keyed by one
/// of these. Construction enforces the ordering invariant, so downstream
/// code can rely on `span_days() >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting inverted inputs.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::validation(
                "start_date must be less than or equal to end_date",
            ));
        }
        Ok(Self { start, end })
    }

    /// Inclusive day count: `(end - start) + 1`.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_day_span_is_one() {
        let range = DateRange::new(d("2023-01-01"), d("2023-01-01")).unwrap();
        assert_eq!(range.span_days(), 1);
    }

    #[test]
    fn test_inclusive_span() {
        let range = DateRange::new(d("2023-01-01"), d("2023-01-05")).unwrap();
        assert_eq!(range.span_days(), 5);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::new(d("2023-01-05"), d("2023-01-01")).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Validation);
    }

    #[test]
    fn test_span_across_year_boundary() {
        let range = DateRange::new(d("2022-12-30"), d("2023-01-02")).unwrap();
        assert_eq!(range.span_days(), 4);
    }
}
