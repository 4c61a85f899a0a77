//! Aggregation helpers rolling movements up into reporting shapes.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use shopbook_domain::{
    CategoryTotals, DailyTotal, DateWindow, FiscalSummary, Ledger, MovementKind, UNCATEGORIZED,
};

use crate::CoreError;

/// Aggregates ledger data into time-series and categorical summaries.
///
/// Every method is a synchronous read over one loaded snapshot; a writer
/// saving mid-read is simply not visible until the snapshot is reloaded.
pub struct SummaryService;

impl SummaryService {
    /// Returns one entry per calendar day of the inclusive window, in
    /// date order, with days lacking sales filled as zero.
    ///
    /// Single grouped pass over the movements, then gap fill; the result
    /// length always equals `window.day_count()`.
    pub fn daily_sales_totals(
        ledger: &Ledger,
        business_id: Uuid,
        window: DateWindow,
    ) -> Result<Vec<DailyTotal>, CoreError> {
        if ledger.business(business_id).is_none() {
            return Err(CoreError::BusinessNotFound(business_id));
        }
        let mut by_day: HashMap<NaiveDate, f64> = HashMap::new();
        for movement in ledger.movements_for(business_id) {
            if movement.is_sale() && window.contains(movement.date) {
                *by_day.entry(movement.date).or_insert(0.0) += movement.amount;
            }
        }
        Ok(window
            .days()
            .map(|date| DailyTotal {
                date,
                total: by_day.get(&date).copied().unwrap_or(0.0),
            })
            .collect())
    }

    /// Sums movement amounts per category label across the whole business
    /// history. Movements without a category collapse into
    /// [`UNCATEGORIZED`].
    ///
    /// Sales and expenses are summed together, so a label's total can mix
    /// revenue and costs.
    pub fn category_totals(
        ledger: &Ledger,
        business_id: Uuid,
    ) -> Result<CategoryTotals, CoreError> {
        if ledger.business(business_id).is_none() {
            return Err(CoreError::BusinessNotFound(business_id));
        }
        let mut totals = CategoryTotals::new();
        for movement in ledger.movements_for(business_id) {
            let label = movement.category.as_deref().unwrap_or(UNCATEGORIZED);
            *totals.entry(label.to_string()).or_insert(0.0) += movement.amount;
        }
        Ok(totals)
    }

    /// Totals sales and expenses for the calendar month and derives
    /// `profit = sales - expenses`. No tax logic beyond the subtraction.
    pub fn fiscal_summary(
        ledger: &Ledger,
        business_id: Uuid,
        year: i32,
        month: u32,
    ) -> Result<FiscalSummary, CoreError> {
        if ledger.business(business_id).is_none() {
            return Err(CoreError::BusinessNotFound(business_id));
        }
        let window = DateWindow::month(year, month)?;
        let mut sales = 0.0;
        let mut expenses = 0.0;
        for movement in ledger.movements_for(business_id) {
            if !window.contains(movement.date) {
                continue;
            }
            match movement.kind {
                MovementKind::Sale => sales += movement.amount,
                MovementKind::Expense => expenses += movement.amount,
            }
        }
        Ok(FiscalSummary::from_totals(year, month, sales, expenses))
    }
}
