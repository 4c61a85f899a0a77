//! Business logic for the append-only movement ledger.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use shopbook_domain::{Ledger, Movement, MovementKind};

use crate::CoreError;

/// Provides validated appends and scoped reads for [`Movement`] entities.
///
/// Movements are immutable once recorded; there is no update or delete
/// path. Callers are expected to have run the ownership check before
/// passing a `business_id` here.
pub struct MovementService;

impl MovementService {
    /// Appends a movement to the business ledger and returns its id.
    ///
    /// The amount must be a finite, non-negative number; the sign of the
    /// event is carried by `kind`, not the amount.
    #[allow(clippy::too_many_arguments)]
    pub fn record(
        ledger: &mut Ledger,
        business_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
        kind: MovementKind,
        amount: f64,
        category: Option<String>,
        note: Option<String>,
    ) -> Result<Uuid, CoreError> {
        validate_amount(amount)?;
        if ledger.business(business_id).is_none() {
            return Err(CoreError::BusinessNotFound(business_id));
        }
        let mut movement = Movement::new(business_id, date, time, kind, amount);
        movement.category = category.filter(|label| !label.trim().is_empty());
        movement.note = note;
        debug!(%business_id, %kind, amount, "recording movement");
        Ok(ledger.add_movement(movement))
    }

    /// Returns every movement recorded for the business, in insertion
    /// order. No ordering beyond that is guaranteed.
    pub fn list(ledger: &Ledger, business_id: Uuid) -> Result<Vec<&Movement>, CoreError> {
        if ledger.business(business_id).is_none() {
            return Err(CoreError::BusinessNotFound(business_id));
        }
        Ok(ledger.movements_for(business_id).collect())
    }

    /// Fetches a single movement, the record behind printable tickets.
    pub fn get(ledger: &Ledger, movement_id: Uuid) -> Result<&Movement, CoreError> {
        ledger
            .movement(movement_id)
            .ok_or(CoreError::MovementNotFound(movement_id))
    }
}

pub(crate) fn validate_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() {
        return Err(CoreError::Validation(format!(
            "amount must be a finite number, got {}",
            amount
        )));
    }
    if amount < 0.0 {
        return Err(CoreError::Validation(format!(
            "amount must not be negative, got {}",
            amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopbook_domain::{Business, User};

    fn ledger_with_business() -> (Ledger, Uuid) {
        let mut ledger = Ledger::new("Shop");
        let owner = ledger.add_user(User::new("sub-1", "a@example.com", "Ana"));
        let business = ledger.add_business(Business::new(owner, "Stand"));
        (ledger, business)
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn record_appends_and_returns_id() {
        let (mut ledger, business) = ledger_with_business();
        let id = MovementService::record(
            &mut ledger,
            business,
            date(2024, 1, 1),
            noon(),
            MovementKind::Sale,
            100.0,
            Some("counter".into()),
            None,
        )
        .expect("record succeeds");

        let stored = MovementService::get(&ledger, id).expect("movement exists");
        assert_eq!(stored.amount, 100.0);
        assert_eq!(stored.category.as_deref(), Some("counter"));
    }

    #[test]
    fn record_rejects_negative_and_non_finite_amounts() {
        let (mut ledger, business) = ledger_with_business();
        for amount in [-1.0, f64::NAN, f64::INFINITY] {
            let err = MovementService::record(
                &mut ledger,
                business,
                date(2024, 1, 1),
                noon(),
                MovementKind::Expense,
                amount,
                None,
                None,
            )
            .expect_err("invalid amount must fail");
            assert!(matches!(err, CoreError::Validation(_)), "got {err:?}");
        }
        assert_eq!(ledger.movement_count(), 0);
    }

    #[test]
    fn record_rejects_unknown_business() {
        let (mut ledger, _) = ledger_with_business();
        let err = MovementService::record(
            &mut ledger,
            Uuid::new_v4(),
            date(2024, 1, 1),
            noon(),
            MovementKind::Sale,
            10.0,
            None,
            None,
        )
        .expect_err("unknown business must fail");
        assert!(matches!(err, CoreError::BusinessNotFound(_)));
    }

    #[test]
    fn blank_category_is_stored_as_none() {
        let (mut ledger, business) = ledger_with_business();
        let id = MovementService::record(
            &mut ledger,
            business,
            date(2024, 1, 1),
            noon(),
            MovementKind::Sale,
            10.0,
            Some("  ".into()),
            None,
        )
        .expect("record");
        assert!(MovementService::get(&ledger, id).unwrap().category.is_none());
    }

    #[test]
    fn list_returns_only_the_requested_business() {
        let (mut ledger, business) = ledger_with_business();
        let owner = ledger.users[0].id;
        let other = ledger.add_business(Business::new(owner, "Other"));
        for (target, amount) in [(business, 10.0), (other, 20.0), (business, 30.0)] {
            MovementService::record(
                &mut ledger,
                target,
                date(2024, 1, 1),
                noon(),
                MovementKind::Sale,
                amount,
                None,
                None,
            )
            .expect("record");
        }

        let listed = MovementService::list(&ledger, business).expect("list");
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|m| m.business_id == business));
    }

    #[test]
    fn get_reports_missing_movement() {
        let (ledger, _) = ledger_with_business();
        let err = MovementService::get(&ledger, Uuid::new_v4()).expect_err("missing");
        assert!(matches!(err, CoreError::MovementNotFound(_)));
    }
}
