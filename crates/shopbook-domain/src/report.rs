//! Aggregation and forecast result shapes.
//!
//! These are the plain records handed to presentation code; they
//! serialize directly to JSON.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label movements without a category collapse into when aggregating.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Sales total for one calendar day of a reporting window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64,
}

/// Per-category movement totals, keyed by category label.
pub type CategoryTotals = BTreeMap<String, f64>;

/// Monthly aggregate of sales, expenses and derived profit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FiscalSummary {
    pub year: i32,
    pub month: u32,
    pub sales: f64,
    pub expenses: f64,
    pub profit: f64,
}

impl FiscalSummary {
    pub fn from_totals(year: i32, month: u32, sales: f64, expenses: f64) -> Self {
        Self {
            year,
            month,
            sales,
            expenses,
            profit: sales - expenses,
        }
    }
}

/// One projected day of the sales forecast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fiscal_summary_profit_is_sales_minus_expenses() {
        let summary = FiscalSummary::from_totals(2024, 3, 150.0, 40.0);
        assert_eq!(summary.profit, summary.sales - summary.expenses);
        assert_eq!(summary.profit, 110.0);
    }

    #[test]
    fn daily_total_serializes_date_and_total() {
        let total = DailyTotal {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            total: 12.5,
        };
        let json = serde_json::to_string(&total).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-01","total":12.5}"#);
    }
}
