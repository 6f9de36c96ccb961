use super::*;
use time::macros::date;

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-6, "expected {expected}, got {actual}");
}

#[test]
fn two_day_standard_rental_breakdown() {
    let pricing = calculate_rental_pricing(
        Some(date!(2025 - 10 - 15)),
        Some(date!(2025 - 10 - 17)),
        50000.0,
        &INSURANCE_OPTIONS,
        "standard",
    );
    assert_eq!(pricing.days, 2);
    assert_close(pricing.daily_rate, 50000.0);
    assert_close(pricing.subtotal, 100_000.0);
    assert_close(pricing.insurance_cost, 6000.0);
    assert_close(pricing.security_deposit, 20000.0);
    assert_close(pricing.total, 106_000.0);
}

#[test]
fn missing_date_yields_zeroed_breakdown_with_rate_echoed() {
    let pricing = calculate_rental_pricing(None, Some(date!(2025 - 10 - 17)), 50000.0, &INSURANCE_OPTIONS, "premium");
    assert_eq!(
        pricing,
        RentalPricing {
            days: 0,
            daily_rate: 50000.0,
            subtotal: 0.0,
            insurance_cost: 0.0,
            security_deposit: 0.0,
            total: 0.0
        }
    );
    let pricing = calculate_rental_pricing(Some(date!(2025 - 10 - 15)), None, 10.0, &INSURANCE_OPTIONS, "basic");
    assert_eq!(pricing.days, 0);
    assert_close(pricing.daily_rate, 10.0);
}

#[test]
fn same_day_and_reversed_ranges_count_one_day() {
    let d = date!(2025 - 10 - 15);
    assert_eq!(rental_days(d, d), 1);
    assert_eq!(rental_days(d, date!(2025 - 10 - 10)), 1);

    let pricing = calculate_rental_pricing(Some(d), Some(date!(2025 - 10 - 01)), 100.0, &INSURANCE_OPTIONS, "basic");
    assert_eq!(pricing.days, 1);
    assert_close(pricing.total, 100.0);
}

#[test]
fn unknown_insurance_costs_nothing() {
    let pricing = calculate_rental_pricing(
        Some(date!(2025 - 01 - 01)),
        Some(date!(2025 - 01 - 04)),
        1000.0,
        &INSURANCE_OPTIONS,
        "platinum",
    );
    assert_eq!(pricing.days, 3);
    assert_close(pricing.insurance_cost, 0.0);
    assert_close(pricing.total, 3000.0);
}

#[test]
fn deposit_is_flat_and_excluded_from_total() {
    let pricing = calculate_rental_pricing(
        Some(date!(2025 - 03 - 01)),
        Some(date!(2025 - 03 - 11)),
        1000.0,
        &INSURANCE_OPTIONS,
        "premium",
    );
    assert_eq!(pricing.days, 10);
    assert_close(pricing.security_deposit, 400.0);
    assert_close(pricing.total, 10_000.0 + 50_000.0);
}

#[test]
fn rental_days_crosses_month_and_year() {
    assert_eq!(rental_days(date!(2024 - 12 - 30), date!(2025 - 01 - 02)), 3);
    assert_eq!(rental_days(date!(2024 - 02 - 28), date!(2024 - 03 - 01)), 2);
}

#[test]
fn parse_and_format_dates() {
    assert_eq!(parse_date("2025-10-15"), Some(date!(2025 - 10 - 15)));
    assert_eq!(parse_date("  2025-10-15 "), Some(date!(2025 - 10 - 15)));
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("15/10/2025"), None);
    assert_eq!(parse_date("2025-02-30"), None);
    assert_eq!(format_date(date!(2025 - 01 - 05)), "2025-01-05");
}

#[test]
fn find_insurance_by_id() {
    assert_eq!(find_insurance(&INSURANCE_OPTIONS, "standard").map(|o| o.cost_per_day), Some(3000.0));
    assert!(find_insurance(&INSURANCE_OPTIONS, "").is_none());
    assert!(find_insurance(&INSURANCE_OPTIONS, DEFAULT_INSURANCE).is_some());
}

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(106_000.0), "106,000");
    assert_eq!(format_amount(999.0), "999");
    assert_eq!(format_amount(1_234_567.4), "1,234,567");
    assert_eq!(format_amount(0.0), "0");
    assert_eq!(format_amount(-2500.0), "-2,500");
}
