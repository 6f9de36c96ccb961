//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client ships as static WASM, so there is no runtime environment to
//! read. The API base URL is baked in at compile time from
//! `TRIPNEST_API_URL`, falling back to the local development backend.
//!
//! The SSR host binary is the one runtime consumer: it reads `PORT` when it
//! starts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Storage key for the persisted `{ user, token }` session blob.
pub const SESSION_STORAGE_KEY: &str = "tripnest_session";

/// Storage key for the persisted cart line items.
pub const CART_STORAGE_KEY: &str = "tripnest_cart";

/// Base URL of the booking/rating REST backend, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("TRIPNEST_API_URL"))
}

fn normalize_base_url(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_BASE_URL,
    }
}

/// Listening port for the SSR host. Unset, blank, or unparsable values fall
/// back to [`DEFAULT_SERVER_PORT`].
pub fn server_port(raw: Option<&str>) -> u16 {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_SERVER_PORT)
}
