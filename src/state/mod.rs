//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `cart`, `filter`, `ratings`) so
//! components depend on small focused models. Containers that persist take
//! the storage port explicitly on each mutation.

pub mod cart;
pub mod filter;
pub mod ratings;
pub mod session;
