//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and error normalization, and `types` defines
//! the wire schema shared by pages and state containers.

pub mod api;
pub mod types;
