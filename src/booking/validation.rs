//! Car rental form gating rules.
//!
//! These run before submission and are independent of pricing: the modal can
//! show a price for a range it would still refuse to submit.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use time::Date;

use super::pricing::{RentalPricing, format_date, parse_date};
use crate::net::types::CarBookingRequest;

pub const MIN_DRIVER_AGE: u32 = 21;

/// Form fields that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    PickupDate,
    DropoffDate,
    DriverAge,
    LicenseNumber,
}

/// Per-field error messages; empty means the form is submittable.
pub type BookingErrors = BTreeMap<BookingField, &'static str>;

/// Raw input values as typed into the booking modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub pickup_date: String,
    pub dropoff_date: String,
    pub driver_age: String,
    pub license_number: String,
    pub insurance: String,
}

/// A form that passed every rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidBooking {
    pub pickup: Date,
    pub dropoff: Date,
    pub driver_age: u32,
    pub license_number: String,
}

/// Check every rule and collect one message per failing field.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate_booking(form: &BookingForm, today: Date) -> Result<ValidBooking, BookingErrors> {
    let mut errors = BookingErrors::new();

    let pickup = parse_date(&form.pickup_date);
    match pickup {
        None => {
            errors.insert(BookingField::PickupDate, "Pick-up date is required.");
        }
        Some(p) if p < today => {
            errors.insert(BookingField::PickupDate, "Pick-up date cannot be in the past.");
        }
        Some(_) => {}
    }

    let dropoff = parse_date(&form.dropoff_date);
    match (pickup, dropoff) {
        (_, None) => {
            errors.insert(BookingField::DropoffDate, "Drop-off date is required.");
        }
        (Some(p), Some(d)) if d <= p => {
            errors.insert(BookingField::DropoffDate, "Drop-off date must be after pick-up date.");
        }
        _ => {}
    }

    let driver_age = form.driver_age.trim().parse::<u32>().ok();
    match driver_age {
        None => {
            errors.insert(BookingField::DriverAge, "Driver age is required.");
        }
        Some(age) if age < MIN_DRIVER_AGE => {
            errors.insert(BookingField::DriverAge, "Driver must be at least 21 years old.");
        }
        Some(_) => {}
    }

    let license_number = form.license_number.trim();
    if license_number.is_empty() {
        errors.insert(BookingField::LicenseNumber, "Driver license number is required.");
    }

    match (pickup, dropoff, driver_age) {
        (Some(pickup), Some(dropoff), Some(driver_age)) if errors.is_empty() => {
            Ok(ValidBooking { pickup, dropoff, driver_age, license_number: license_number.to_owned() })
        }
        _ => Err(errors),
    }
}

/// Assemble the request body for a validated form.
pub fn build_car_booking_request(
    car_id: &str,
    booking: &ValidBooking,
    insurance: &str,
    pricing: &RentalPricing,
    currency: Option<String>,
) -> CarBookingRequest {
    CarBookingRequest {
        car_id: car_id.to_owned(),
        pickup_date: format_date(booking.pickup),
        dropoff_date: format_date(booking.dropoff),
        insurance: insurance.to_owned(),
        driver_age: booking.driver_age,
        license_number: booking.license_number.clone(),
        total: pricing.total,
        currency,
    }
}

/// Today's date in the visitor's local calendar.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok();
        let month = u8::try_from(now.get_month() + 1).ok().and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        match (year, month, day) {
            (Some(year), Some(month), Some(day)) => Date::from_calendar_date(year, month, day).unwrap_or(Date::MIN),
            _ => Date::MIN,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}
