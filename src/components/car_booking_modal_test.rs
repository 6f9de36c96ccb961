use super::*;
use time::macros::date;

#[test]
fn pricing_rows_list_breakdown_with_currency() {
    let pricing = calculate_rental_pricing(
        Some(date!(2025 - 10 - 15)),
        Some(date!(2025 - 10 - 17)),
        50000.0,
        &INSURANCE_OPTIONS,
        "standard",
    );
    let rows = pricing_rows(&pricing, Some("KRW"));
    assert_eq!(
        rows,
        vec![
            ("Rental days", "2".to_owned()),
            ("Daily rate", "50,000 KRW".to_owned()),
            ("Subtotal", "100,000 KRW".to_owned()),
            ("Insurance", "6,000 KRW".to_owned()),
            ("Total due now", "106,000 KRW".to_owned()),
            ("Security deposit (refundable)", "20,000 KRW".to_owned()),
        ]
    );
}

#[test]
fn pricing_rows_for_empty_dates_show_zeroes() {
    let pricing = calculate_rental_pricing(None, None, 800.0, &INSURANCE_OPTIONS, DEFAULT_INSURANCE);
    let rows = pricing_rows(&pricing, None);
    assert_eq!(rows[0], ("Rental days", "0".to_owned()));
    assert_eq!(rows[1], ("Daily rate", "800".to_owned()));
    assert_eq!(rows[4], ("Total due now", "0".to_owned()));
}
