//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! This module exposes a simplified API that frontends (CLI, HTTP
//! handlers, exporters) can rely on without depending on the entire
//! service surface area. Movement kinds arrive as wire literals and are
//! validated here, at the write boundary.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use shopbook_domain::{
    CategoryTotals, DailyTotal, DateWindow, FiscalSummary, ForecastPoint, Ledger,
};

use crate::{
    business_service::BusinessService, forecast_service::ForecastService,
    ledger_service::LedgerService, movement_service::MovementService,
    summary_service::SummaryService, user_service::UserService, CoreError,
};

/// Creates a new ledger with the supplied name.
pub fn api_create_ledger(name: impl Into<String>) -> Ledger {
    LedgerService::create(name)
}

/// Resolves (or creates) the user behind an identity-provider callback.
pub fn api_ensure_user(
    ledger: &mut Ledger,
    subject: &str,
    email: &str,
    name: &str,
) -> Result<Uuid, CoreError> {
    UserService::ensure_user(ledger, subject, email, name)
}

/// Creates a business owned by `owner_id` and returns its identifier.
pub fn api_create_business(
    ledger: &mut Ledger,
    owner_id: Uuid,
    name: impl Into<String>,
) -> Result<Uuid, CoreError> {
    BusinessService::create(ledger, owner_id, name)
}

/// Records a movement from wire-shaped fields; `kind` must be the
/// literal `sale` or `expense`.
#[allow(clippy::too_many_arguments)]
pub fn api_record_movement(
    ledger: &mut Ledger,
    business_id: Uuid,
    date: NaiveDate,
    time: NaiveTime,
    kind: &str,
    amount: f64,
    category: Option<String>,
    note: Option<String>,
) -> Result<Uuid, CoreError> {
    let kind = kind.parse()?;
    MovementService::record(ledger, business_id, date, time, kind, amount, category, note)
}

/// Dense daily sales series for the trailing `days` window ending at
/// `today`.
pub fn api_sales_series(
    ledger: &Ledger,
    business_id: Uuid,
    today: NaiveDate,
    days: u32,
) -> Result<Vec<DailyTotal>, CoreError> {
    let window = DateWindow::last_days(today, days)?;
    SummaryService::daily_sales_totals(ledger, business_id, window)
}

/// Per-category totals across the business history.
pub fn api_category_totals(
    ledger: &Ledger,
    business_id: Uuid,
) -> Result<CategoryTotals, CoreError> {
    SummaryService::category_totals(ledger, business_id)
}

/// Monthly fiscal summary with derived profit.
pub fn api_fiscal_summary(
    ledger: &Ledger,
    business_id: Uuid,
    year: i32,
    month: u32,
) -> Result<FiscalSummary, CoreError> {
    SummaryService::fiscal_summary(ledger, business_id, year, month)
}

/// Linear sales forecast for the next `horizon_days` days.
pub fn api_forecast_sales(
    ledger: &Ledger,
    business_id: Uuid,
    horizon_days: u32,
) -> Result<Vec<ForecastPoint>, CoreError> {
    ForecastService::forecast_sales(ledger, business_id, horizon_days)
}
