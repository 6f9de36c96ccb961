//! Car rental cost breakdown.
//!
//! Pure arithmetic over the selected dates, the car's daily rate, and the
//! chosen insurance tier. Runs on every keystroke in the booking modal, so it
//! never fails: missing dates produce a zeroed breakdown instead of an error.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use time::Date;
use time::macros::format_description;

/// Refundable hold as a fraction of one day's rate.
pub const SECURITY_DEPOSIT_RATE: f64 = 0.4;

/// Insurance tier selectable in the booking modal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InsuranceOption {
    pub id: &'static str,
    pub label: &'static str,
    pub cost_per_day: f64,
}

pub const DEFAULT_INSURANCE: &str = "basic";

pub const INSURANCE_OPTIONS: [InsuranceOption; 3] = [
    InsuranceOption { id: "basic", label: "Basic (included)", cost_per_day: 0.0 },
    InsuranceOption { id: "standard", label: "Standard coverage", cost_per_day: 3000.0 },
    InsuranceOption { id: "premium", label: "Premium coverage", cost_per_day: 5000.0 },
];

/// Cost decomposition shown in the booking modal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RentalPricing {
    pub days: u32,
    pub daily_rate: f64,
    pub subtotal: f64,
    pub insurance_cost: f64,
    pub security_deposit: f64,
    /// Due now. Excludes the refundable security deposit.
    pub total: f64,
}

pub fn find_insurance<'a>(options: &'a [InsuranceOption], id: &str) -> Option<&'a InsuranceOption> {
    options.iter().find(|o| o.id == id)
}

/// Whole rental days between two dates, never less than 1.
///
/// Dates carry no time of day, so the difference is already whole and the
/// ceiling is exact. A dropoff on or before pickup still counts as one day.
pub fn rental_days(pickup: Date, dropoff: Date) -> u32 {
    let days = (dropoff - pickup).whole_days().max(1);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Compute the breakdown for `insurance_id` out of `options`.
///
/// Without both dates, `days` and every amount except `daily_rate` are zero.
/// An unknown insurance id costs nothing.
pub fn calculate_rental_pricing(
    pickup: Option<Date>,
    dropoff: Option<Date>,
    daily_rate: f64,
    options: &[InsuranceOption],
    insurance_id: &str,
) -> RentalPricing {
    let (Some(pickup), Some(dropoff)) = (pickup, dropoff) else {
        return RentalPricing { daily_rate, ..RentalPricing::default() };
    };

    let days = rental_days(pickup, dropoff);
    let day_count = f64::from(days);
    let subtotal = daily_rate * day_count;
    let insurance_cost = find_insurance(options, insurance_id).map_or(0.0, |o| o.cost_per_day * day_count);

    RentalPricing {
        days,
        daily_rate,
        subtotal,
        insurance_cost,
        security_deposit: daily_rate * SECURITY_DEPOSIT_RATE,
        total: subtotal + insurance_cost,
    }
}

/// Parse an `<input type="date">` value (`YYYY-MM-DD`). Blank or invalid is `None`.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

/// Format a date as `YYYY-MM-DD` for the wire and for date inputs.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_default()
}

/// Group thousands for display: `106000.0` becomes `106,000`.
pub fn format_amount(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 { format!("-{grouped}") } else { grouped }
}
