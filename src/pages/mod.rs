//! Route-level page modules.

pub mod cart;
pub mod detail;
pub mod home;
pub mod listing;
pub mod login;
