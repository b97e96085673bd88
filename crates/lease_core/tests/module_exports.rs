//! Integration tests for module exports.
//!
//! Verifies that public types are reachable both through their modules and
//! through the `types` re-exports.

#[test]
fn test_types_module_exports() {
    use lease_core::types::error::{DateError, MoneyError};
    use lease_core::types::money::Money;
    use lease_core::types::time::{months_spanned, Date};

    let start = Date::from_ymd(2024, 1, 1).unwrap();
    let end = Date::from_ymd(2024, 12, 31).unwrap();
    assert_eq!(months_spanned(start, end).unwrap(), 12);

    assert_eq!(Money::from_cents(100).to_string(), "1.00");

    let _: DateError = Date::parse("nope").unwrap_err();
    let _: MoneyError = Money::from_major(f64::NAN).unwrap_err();
}

#[test]
fn test_types_reexports() {
    use lease_core::types::{Date, DateError, Money, MoneyError};

    let parsed: Result<Date, DateError> = "2024-02-29".parse();
    assert!(parsed.is_ok());

    let amount: Result<Money, MoneyError> = "1,250.75".parse();
    assert_eq!(amount.unwrap().cents(), 125_075);
}

#[test]
fn test_date_and_money_compose() {
    use lease_core::types::{Date, Money};

    // A lease year starting on leap day ends the day before its anniversary
    let start = Date::from_ymd(2024, 2, 29).unwrap();
    let year_end = start.add_years(1).unwrap().previous_day().unwrap();
    assert_eq!(year_end, Date::from_ymd(2025, 2, 27).unwrap());

    let rent = Money::from_major(1500.0).unwrap();
    let total = Money::checked_sum(std::iter::repeat(rent).take(12)).unwrap();
    assert_eq!(total.to_string(), "18000.00");
}
