//! Car rental booking dialog with live pricing and inline validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from a car's detail page. The breakdown recomputes on every edit;
//! validation only runs on submit. While the booking request is in flight
//! the submit button stays disabled, and a failed request re-enables it
//! without changing anything else.

#[cfg(test)]
#[path = "car_booking_modal_test.rs"]
mod car_booking_modal_test;

use leptos::prelude::*;

use crate::booking::pricing::{
    DEFAULT_INSURANCE, INSURANCE_OPTIONS, RentalPricing, calculate_rental_pricing, format_amount, parse_date,
};
use crate::booking::validation::{
    BookingErrors, BookingField, BookingForm, build_car_booking_request, today, validate_booking,
};
use crate::net::types::Listing;
use crate::state::session::SessionState;

/// Label/value lines of the cost breakdown, in display order.
pub(crate) fn pricing_rows(pricing: &RentalPricing, currency: Option<&str>) -> Vec<(&'static str, String)> {
    let money = |amount: f64| match currency {
        Some(c) => format!("{} {c}", format_amount(amount)),
        None => format_amount(amount),
    };
    vec![
        ("Rental days", pricing.days.to_string()),
        ("Daily rate", money(pricing.daily_rate)),
        ("Subtotal", money(pricing.subtotal)),
        ("Insurance", money(pricing.insurance_cost)),
        ("Total due now", money(pricing.total)),
        ("Security deposit (refundable)", money(pricing.security_deposit)),
    ]
}

#[component]
pub fn CarBookingModal(car: Listing, on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(BookingForm { insurance: DEFAULT_INSURANCE.to_owned(), ..BookingForm::default() });
    let errors = RwSignal::new(BookingErrors::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let confirmation = RwSignal::new(None::<String>);

    let daily_rate = car.price.unwrap_or(0.0);
    let title = format!("Book {}", car.name);
    let car = StoredValue::new(car);

    let pricing = Memo::new(move |_| {
        let f = form.get();
        calculate_rental_pricing(
            parse_date(&f.pickup_date),
            parse_date(&f.dropoff_date),
            daily_rate,
            &INSURANCE_OPTIONS,
            &f.insurance,
        )
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        let booking = match validate_booking(&current, today()) {
            Ok(booking) => booking,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(BookingErrors::new());
        let request = car.with_value(|c| {
            build_car_booking_request(&c.id, &booking, &current.insurance, &pricing.get_untracked(), c.currency.clone())
        });
        busy.set(true);
        info.set("Submitting booking…".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token;
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_car_booking(&request, token.as_deref()).await {
                    Ok(confirmed) => {
                        info.set(String::new());
                        confirmation.set(Some(confirmed.id));
                    }
                    Err(e) => {
                        log::error!("car booking for {} failed: {e}", request.car_id);
                        info.set(e.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, session, confirmation);
    };

    let field_error = move |field: BookingField| {
        move || errors.get().get(&field).copied().map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    let breakdown = move || {
        let currency = car.with_value(|c| c.currency.clone());
        pricing_rows(&pricing.get(), currency.as_deref())
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="booking-modal__row">
                        <span>{label}</span>
                        <span>{value}</span>
                    </div>
                }
            })
            .collect_view()
    };

    let insurance_options = INSURANCE_OPTIONS
        .iter()
        .map(|o| view! { <option value=o.id>{o.label}</option> })
        .collect_view();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog booking-modal" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <Show when=move || !session.get().is_authenticated()>
                    <p class="booking-modal__hint">"You may need to log in before booking."</p>
                </Show>
                <form class="booking-modal__form" on:submit=on_submit>
                    <label>
                        "Pick-up date"
                        <input
                            type="date"
                            prop:value=move || form.get().pickup_date
                            on:input=move |ev| form.update(|f| f.pickup_date = event_target_value(&ev))
                        />
                    </label>
                    {field_error(BookingField::PickupDate)}
                    <label>
                        "Drop-off date"
                        <input
                            type="date"
                            prop:value=move || form.get().dropoff_date
                            on:input=move |ev| form.update(|f| f.dropoff_date = event_target_value(&ev))
                        />
                    </label>
                    {field_error(BookingField::DropoffDate)}
                    <label>
                        "Driver age"
                        <input
                            type="number"
                            min="18"
                            prop:value=move || form.get().driver_age
                            on:input=move |ev| form.update(|f| f.driver_age = event_target_value(&ev))
                        />
                    </label>
                    {field_error(BookingField::DriverAge)}
                    <label>
                        "Driver license number"
                        <input
                            type="text"
                            prop:value=move || form.get().license_number
                            on:input=move |ev| form.update(|f| f.license_number = event_target_value(&ev))
                        />
                    </label>
                    {field_error(BookingField::LicenseNumber)}
                    <label>
                        "Insurance"
                        <select
                            prop:value=move || form.get().insurance
                            on:change=move |ev| form.update(|f| f.insurance = event_target_value(&ev))
                        >
                            {insurance_options}
                        </select>
                    </label>

                    <div class="booking-modal__breakdown">{breakdown}</div>

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>"Close"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Confirm booking"
                        </button>
                    </div>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="booking-modal__message">{move || info.get()}</p>
                </Show>
                {move || {
                    confirmation.get().map(|id| {
                        view! { <p class="booking-modal__confirmed">{format!("Booking confirmed. Reference: {id}")}</p> }
                    })
                }}
            </div>
        </div>
    }
}
