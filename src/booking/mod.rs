//! Car rental booking logic used by the booking modal.
//!
//! DESIGN
//! ======
//! `pricing` is pure arithmetic shown live while the form is edited;
//! `validation` gates submission. Neither touches the network or storage.

pub mod pricing;
pub mod validation;
