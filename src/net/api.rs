//! REST API helpers for the booking, listing, and rating backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! `ApiError::Unavailable` since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is converted to `ApiError` here and never escapes as a panic.
//! Pages turn it into inline text with `ApiError::user_message`. A 401 is its
//! own variant; for the ratings read it collapses to an empty payload so
//! anonymous visitors see "no ratings" rather than an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{
    AuthPayload, BookingConfirmation, CarBookingRequest, Envelope, ErrorBody, Listing, ListingKind, NewRating,
    Rating, RatingsPayload,
};
#[cfg(feature = "hydrate")]
use crate::config::api_base_url;

/// Uniform failure shape for every backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not authenticated")]
    Unauthorized,
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for showing next to the control that triggered the call.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Please try again.".to_owned(),
            Self::Unauthorized => "Please log in to continue.".to_owned(),
            Self::Status { message, .. } => message.clone(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Unavailable => "This action is only available in the browser.".to_owned(),
        }
    }
}

/// Map a raw HTTP status and body to the decoded `{ data, message }` envelope.
///
/// # Errors
///
/// `Unauthorized` for 401, `Status` for any other non-2xx (carrying the
/// server's `message` when present), `Decode` when a 2xx body does not match.
pub fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| status_fallback_message(status));
        return Err(ApiError::Status { status, message });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Ratings reads treat "not authenticated" as "nothing to show".
///
/// # Errors
///
/// Passes through every error except `Unauthorized`.
pub fn ratings_or_default(result: Result<RatingsPayload, ApiError>) -> Result<RatingsPayload, ApiError> {
    match result {
        Err(ApiError::Unauthorized) => Ok(RatingsPayload::default()),
        other => other,
    }
}

/// `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn status_fallback_message(status: u16) -> String {
    format!("request failed with status {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn listings_endpoint(base: &str, kind: ListingKind) -> String {
    format!("{base}/{}", kind.collection())
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_endpoint(base: &str, kind: ListingKind, id: &str) -> String {
    format!("{base}/{}/{id}", kind.collection())
}

#[cfg(any(test, feature = "hydrate"))]
fn ratings_endpoint(base: &str, entity_type: &str, id: &str) -> String {
    format!("{base}/ratings/{entity_type}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn submit_rating_endpoint(base: &str) -> String {
    format!("{base}/ratings")
}

#[cfg(any(test, feature = "hydrate"))]
fn car_booking_endpoint(base: &str) -> String {
    format!("{base}/bookings/car-rental")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/auth/login")
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn send<T: DeserializeOwned>(request: gloo_net::http::Request) -> Result<T, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    interpret_response::<T>(status, &body).map(|envelope| envelope.data)
}

#[cfg(feature = "hydrate")]
async fn get<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T, ApiError> {
    let request = with_auth(gloo_net::http::Request::get(url), token)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await
}

#[cfg(feature = "hydrate")]
async fn post<B: serde::Serialize, T: DeserializeOwned>(url: &str, body: &B, token: Option<&str>) -> Result<T, ApiError> {
    let request = with_auth(gloo_net::http::Request::post(url), token)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await
}

/// Fetch the catalog for one kind, e.g. `GET /hotels`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or decode failure.
pub async fn fetch_listings(kind: ListingKind) -> Result<Vec<Listing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get(&listings_endpoint(api_base_url(), kind), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = kind;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single catalog entry, e.g. `GET /cars/9`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or decode failure.
pub async fn fetch_listing(kind: ListingKind, id: &str) -> Result<Listing, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get(&listing_endpoint(api_base_url(), kind, id), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch ratings for an entity via `GET /ratings/{entity_type}/{id}`.
///
/// A 401 yields `RatingsPayload::default()` instead of an error.
///
/// # Errors
///
/// Returns `ApiError` on transport, non-401 status, or decode failure.
pub async fn fetch_ratings(entity_type: &str, id: &str, token: Option<&str>) -> Result<RatingsPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        ratings_or_default(get(&ratings_endpoint(api_base_url(), entity_type, id), token).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (entity_type, id, token);
        Err(ApiError::Unavailable)
    }
}

/// Submit a rating via `POST /ratings`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` without a valid session, or another
/// `ApiError` on transport, status, or decode failure.
pub async fn submit_rating(rating: &NewRating, token: Option<&str>) -> Result<Rating, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post(&submit_rating_endpoint(api_base_url()), rating, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (rating, token);
        Err(ApiError::Unavailable)
    }
}

/// Create a car rental booking via `POST /bookings/car-rental`.
///
/// # Errors
///
/// Returns `ApiError` on transport, status, or decode failure.
pub async fn submit_car_booking(
    request: &CarBookingRequest,
    token: Option<&str>,
) -> Result<BookingConfirmation, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post(&car_booking_endpoint(api_base_url()), request, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, token);
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a user record and bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for rejected credentials, or another
/// `ApiError` on transport, status, or decode failure.
pub async fn login(email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post(&login_endpoint(api_base_url()), &payload, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}
