use chrono::{NaiveDate, NaiveTime};

use crate::{
    BusinessService, CoreError, ForecastService, LedgerService, MovementService, SummaryService,
    UserService,
};
use shopbook_domain::{DateWindow, MovementKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

#[test]
fn ledger_service_creates_empty_ledger() {
    let ledger = LedgerService::create("CoreTest");

    assert_eq!(ledger.name, "CoreTest");
    assert!(ledger.users.is_empty());
    assert!(ledger.businesses.is_empty());
    assert!(ledger.movements.is_empty());
}

#[test]
fn recorded_sale_shows_up_in_daily_totals() {
    let mut ledger = LedgerService::create("RoundTrip");
    let owner = UserService::ensure_user(&mut ledger, "sub", "a@example.com", "Ana").unwrap();
    let business = BusinessService::create(&mut ledger, owner, "Stand").unwrap();

    MovementService::record(
        &mut ledger,
        business,
        date(2024, 1, 1),
        noon(),
        MovementKind::Sale,
        100.0,
        None,
        None,
    )
    .expect("record sale");

    let window = DateWindow::new(date(2023, 12, 25), date(2024, 1, 5)).unwrap();
    let totals = SummaryService::daily_sales_totals(&ledger, business, window).unwrap();
    let day = totals
        .iter()
        .find(|entry| entry.date == date(2024, 1, 1))
        .expect("day present in dense series");
    assert_eq!(day.total, 100.0);
}

#[test]
fn movements_stay_isolated_between_tenants() {
    let mut ledger = LedgerService::create("Isolation");
    let ana = UserService::ensure_user(&mut ledger, "sub-a", "a@example.com", "Ana").unwrap();
    let bea = UserService::ensure_user(&mut ledger, "sub-b", "b@example.com", "Bea").unwrap();
    let stand = BusinessService::create(&mut ledger, ana, "Stand").unwrap();
    let bakery = BusinessService::create(&mut ledger, bea, "Bakery").unwrap();

    for (business, amount) in [(stand, 10.0), (bakery, 20.0), (stand, 30.0)] {
        MovementService::record(
            &mut ledger,
            business,
            date(2024, 1, 1),
            noon(),
            MovementKind::Sale,
            amount,
            None,
            None,
        )
        .unwrap();
    }

    let stand_movements = MovementService::list(&ledger, stand).unwrap();
    assert!(stand_movements.iter().all(|m| m.business_id == stand));
    assert_eq!(stand_movements.len(), 2);

    // The access boundary's check keeps Bea out of Ana's books.
    let err = BusinessService::ensure_owned(&ledger, bea, stand).unwrap_err();
    assert!(matches!(err, CoreError::NotOwner { .. }));
}

#[test]
fn expense_only_days_do_not_unlock_forecasting() {
    let mut ledger = LedgerService::create("Forecast");
    let owner = UserService::ensure_user(&mut ledger, "sub", "a@example.com", "Ana").unwrap();
    let business = BusinessService::create(&mut ledger, owner, "Stand").unwrap();

    // Sales of 10, 20, 30 on days 1..3; days 4 and 5 carry expenses only.
    for day in 1..=3u32 {
        MovementService::record(
            &mut ledger,
            business,
            date(2024, 1, day),
            noon(),
            MovementKind::Sale,
            10.0 * day as f64,
            None,
            None,
        )
        .unwrap();
    }
    for day in 4..=5u32 {
        MovementService::record(
            &mut ledger,
            business,
            date(2024, 1, day),
            noon(),
            MovementKind::Expense,
            5.0,
            None,
            None,
        )
        .unwrap();
    }

    let err = ForecastService::forecast_sales(&ledger, business, 7).unwrap_err();
    assert!(matches!(
        err,
        CoreError::InsufficientData { have: 3, need: 5 }
    ));

    // Two more sale days make five; the fit now reproduces the trend.
    for day in 4..=5u32 {
        MovementService::record(
            &mut ledger,
            business,
            date(2024, 1, day),
            noon(),
            MovementKind::Sale,
            10.0 * day as f64,
            None,
            None,
        )
        .unwrap();
    }
    let points = ForecastService::forecast_sales(&ledger, business, 7).unwrap();
    assert_eq!(points.len(), 7);
    assert!((points[0].predicted - 60.0).abs() < 1e-6);
}
