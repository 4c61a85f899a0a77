//! Linear trend projection of future daily sales totals.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use uuid::Uuid;

use shopbook_domain::{ForecastPoint, Ledger};

use crate::CoreError;

/// Distinct sale-dates required before a fit is attempted.
pub const MIN_SALE_DAYS: usize = 5;

/// Days projected when the caller does not ask for a specific horizon.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Fits an ordinary-least-squares line over historical daily sales and
/// evaluates it past the latest observed date.
pub struct ForecastService;

impl ForecastService {
    /// Projects daily sales totals for the `horizon_days` consecutive
    /// calendar days after the business's latest sale date.
    ///
    /// Training points are (date ordinal, total) pairs, one per day that
    /// had at least one sale. Days with zero sales are not included as
    /// zero points, so the fit tracks observed activity only. A declining
    /// series can legitimately produce negative predictions; they are
    /// returned unclamped.
    pub fn forecast_sales(
        ledger: &Ledger,
        business_id: Uuid,
        horizon_days: u32,
    ) -> Result<Vec<ForecastPoint>, CoreError> {
        if horizon_days == 0 {
            return Err(CoreError::Validation(
                "forecast horizon must be at least one day".into(),
            ));
        }
        if ledger.business(business_id).is_none() {
            return Err(CoreError::BusinessNotFound(business_id));
        }

        let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for movement in ledger.movements_for(business_id) {
            if movement.is_sale() {
                *by_day.entry(movement.date).or_insert(0.0) += movement.amount;
            }
        }
        if by_day.len() < MIN_SALE_DAYS {
            return Err(CoreError::InsufficientData {
                have: by_day.len(),
                need: MIN_SALE_DAYS,
            });
        }

        let (slope, intercept) = fit_line(&by_day);
        // BTreeMap keys are sorted, so the last entry is the latest date.
        let last = *by_day.keys().next_back().unwrap();
        let mut points = Vec::new();
        for offset in 1..=horizon_days as i64 {
            let date = last.checked_add_signed(Duration::days(offset)).ok_or_else(|| {
                CoreError::Validation(format!(
                    "forecast horizon of {} days runs past the calendar ceiling",
                    horizon_days
                ))
            })?;
            points.push(ForecastPoint {
                date,
                predicted: slope * ordinal(date) + intercept,
            });
        }
        Ok(points)
    }
}

fn ordinal(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Mean-centred OLS fit of `total = slope * ordinal + intercept`.
///
/// With at least two distinct dates the ordinal variance is strictly
/// positive, so the denominator cannot vanish.
fn fit_line(by_day: &BTreeMap<NaiveDate, f64>) -> (f64, f64) {
    let n = by_day.len() as f64;
    let mean_x = by_day.keys().map(|date| ordinal(*date)).sum::<f64>() / n;
    let mean_y = by_day.values().sum::<f64>() / n;

    let mut var_x = 0.0;
    let mut cov_xy = 0.0;
    for (date, total) in by_day {
        let dx = ordinal(*date) - mean_x;
        var_x += dx * dx;
        cov_xy += dx * (total - mean_y);
    }
    let slope = cov_xy / var_x;
    (slope, mean_y - slope * mean_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use shopbook_domain::{Business, Movement, MovementKind, User};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    fn ledger_with_business() -> (Ledger, Uuid) {
        let mut ledger = Ledger::new("Shop");
        let owner = ledger.add_user(User::new("sub-1", "a@example.com", "Ana"));
        let business = ledger.add_business(Business::new(owner, "Stand"));
        (ledger, business)
    }

    fn sale(ledger: &mut Ledger, business: Uuid, d: NaiveDate, amount: f64) {
        ledger.add_movement(Movement::new(business, d, noon(), MovementKind::Sale, amount));
    }

    #[test]
    fn fewer_than_five_sale_days_is_insufficient() {
        let (mut ledger, business) = ledger_with_business();
        for day in 1..=4 {
            sale(&mut ledger, business, date(2024, 1, day), 10.0 * day as f64);
        }
        // Expense-only days do not count as sale days.
        ledger.add_movement(Movement::new(
            business,
            date(2024, 1, 5),
            noon(),
            MovementKind::Expense,
            40.0,
        ));

        let err = ForecastService::forecast_sales(&ledger, business, DEFAULT_HORIZON_DAYS)
            .expect_err("four sale days is not enough");
        assert!(
            matches!(err, CoreError::InsufficientData { have: 4, need: 5 }),
            "got {err:?}"
        );
    }

    #[test]
    fn linear_history_is_reproduced_exactly() {
        let (mut ledger, business) = ledger_with_business();
        // totals 10, 20, 30, 40, 50 on consecutive days: slope 10/day.
        for day in 1..=5 {
            sale(&mut ledger, business, date(2024, 1, day), 10.0 * day as f64);
        }

        let points = ForecastService::forecast_sales(&ledger, business, 3).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, date(2024, 1, 6));
        assert!((points[0].predicted - 60.0).abs() < 1e-6);
        assert!((points[2].predicted - 80.0).abs() < 1e-6);
    }

    #[test]
    fn forecast_dates_strictly_increase_from_day_after_latest() {
        let (mut ledger, business) = ledger_with_business();
        for day in [3, 1, 9, 5, 7] {
            sale(&mut ledger, business, date(2024, 2, day), 10.0);
        }

        let points =
            ForecastService::forecast_sales(&ledger, business, DEFAULT_HORIZON_DAYS).unwrap();
        assert_eq!(points.len(), DEFAULT_HORIZON_DAYS as usize);
        assert_eq!(points[0].date, date(2024, 2, 10));
        assert!(points.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn multiple_sales_per_day_are_grouped_into_one_point() {
        let (mut ledger, business) = ledger_with_business();
        for day in 1..=5 {
            // Two sales per day summing to 10 * day.
            sale(&mut ledger, business, date(2024, 1, day), 4.0 * day as f64);
            sale(&mut ledger, business, date(2024, 1, day), 6.0 * day as f64);
        }

        let points = ForecastService::forecast_sales(&ledger, business, 1).unwrap();
        assert!((points[0].predicted - 60.0).abs() < 1e-6);
    }

    #[test]
    fn declining_series_may_predict_negative_totals() {
        let (mut ledger, business) = ledger_with_business();
        for day in 1..=5 {
            sale(&mut ledger, business, date(2024, 1, day), 50.0 - 10.0 * day as f64);
        }

        let points = ForecastService::forecast_sales(&ledger, business, 2).unwrap();
        assert!(points[1].predicted < 0.0, "unclamped fit goes negative");
    }

    #[test]
    fn horizon_past_the_calendar_ceiling_is_a_validation_error() {
        let (mut ledger, business) = ledger_with_business();
        for offset in 0..5 {
            let d = NaiveDate::MAX - chrono::Duration::days(offset);
            sale(&mut ledger, business, d, 10.0);
        }

        let err = ForecastService::forecast_sales(&ledger, business, u32::MAX)
            .expect_err("projection must not run off the calendar");
        assert!(matches!(err, CoreError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn zero_horizon_is_a_validation_error() {
        let (mut ledger, business) = ledger_with_business();
        for day in 1..=5 {
            sale(&mut ledger, business, date(2024, 1, day), 10.0);
        }
        let err = ForecastService::forecast_sales(&ledger, business, 0).expect_err("horizon 0");
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
