//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation, catalog, booking, and review surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod car_booking_modal;
pub mod filter_bar;
pub mod listing_card;
pub mod listing_grid;
pub mod nav_bar;
pub mod rating_panel;
