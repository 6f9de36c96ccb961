//! Helpers shared by the state containers and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser storage access and async request ordering live here so page and
//! component code stays free of both.

pub mod request_seq;
pub mod storage;
