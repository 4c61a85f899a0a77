//! Shared traits and date-window primitives for bookkeeping entities.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Defines an inclusive reporting window over calendar days.
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Builds a window spanning `start` through `end`, both inclusive.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if end < start {
            return Err(DateWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Builds the calendar-month window for `year`/`month`, first through
    /// last day inclusive, handling the December-to-January rollover.
    pub fn month(year: i32, month: u32) -> Result<Self, DateWindowError> {
        let start =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(DateWindowError::InvalidMonth)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or(DateWindowError::InvalidMonth)?
            - Duration::days(1);
        Ok(Self { start, end })
    }

    /// Builds the trailing window of `days` calendar days ending at `end`.
    ///
    /// Day counts that would push the start before the calendar floor are
    /// rejected rather than panicking inside chrono.
    pub fn last_days(end: NaiveDate, days: u32) -> Result<Self, DateWindowError> {
        if days == 0 {
            return Err(DateWindowError::InvalidRange);
        }
        let start = end
            .checked_sub_signed(Duration::days(days as i64 - 1))
            .ok_or(DateWindowError::OutOfBounds)?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days in the window, inclusive of both ends.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterates every calendar day in the window in date order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.day_count()).map(move |offset| start + Duration::days(offset))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateWindow`] values.
pub enum DateWindowError {
    InvalidRange,
    InvalidMonth,
    OutOfBounds,
}

impl fmt::Display for DateWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindowError::InvalidRange => {
                f.write_str("date window end must not precede start")
            }
            DateWindowError::InvalidMonth => f.write_str("month must be between 1 and 12"),
            DateWindowError::OutOfBounds => {
                f.write_str("date window extends past the supported calendar range")
            }
        }
    }
}

impl std::error::Error for DateWindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_rejects_reversed_range() {
        let err = DateWindow::new(date(2024, 2, 1), date(2024, 1, 1)).unwrap_err();
        assert_eq!(err, DateWindowError::InvalidRange);
    }

    #[test]
    fn single_day_window_is_valid() {
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(window.day_count(), 1);
        assert!(window.contains(date(2024, 1, 1)));
    }

    #[test]
    fn month_window_handles_year_rollover() {
        let window = DateWindow::month(2023, 12).unwrap();
        assert_eq!(window.start, date(2023, 12, 1));
        assert_eq!(window.end, date(2023, 12, 31));
    }

    #[test]
    fn month_window_handles_leap_february() {
        let window = DateWindow::month(2024, 2).unwrap();
        assert_eq!(window.end, date(2024, 2, 29));
    }

    #[test]
    fn month_window_rejects_month_thirteen() {
        assert_eq!(
            DateWindow::month(2024, 13).unwrap_err(),
            DateWindowError::InvalidMonth
        );
    }

    #[test]
    fn last_days_counts_the_end_day() {
        let window = DateWindow::last_days(date(2024, 3, 30), 30).unwrap();
        assert_eq!(window.start, date(2024, 3, 1));
        assert_eq!(window.day_count(), 30);
    }

    #[test]
    fn last_days_rejects_windows_past_the_calendar_floor() {
        assert_eq!(
            DateWindow::last_days(date(2024, 3, 30), u32::MAX).unwrap_err(),
            DateWindowError::OutOfBounds
        );
    }

    #[test]
    fn days_iterates_in_date_order_without_gaps() {
        let window = DateWindow::new(date(2024, 1, 30), date(2024, 2, 2)).unwrap();
        let days: Vec<_> = window.days().collect();
        assert_eq!(
            days,
            vec![
                date(2024, 1, 30),
                date(2024, 1, 31),
                date(2024, 2, 1),
                date(2024, 2, 2),
            ]
        );
    }
}
