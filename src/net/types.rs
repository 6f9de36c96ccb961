//! Wire DTOs for the booking, listing, and rating REST backend.
//!
//! DESIGN
//! ======
//! The backend is not under our control and keys entities by either a numeric
//! or a string id depending on the collection, so ids are normalized to
//! `String` at deserialization time.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Authenticated account as returned by `/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

/// Bookable catalog entity kinds, one per backend collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Hotel,
    Car,
    Restaurant,
    Activity,
    Tour,
}

impl ListingKind {
    /// REST collection segment, e.g. `hotels` in `/hotels/42`.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Hotel => "hotels",
            Self::Car => "cars",
            Self::Restaurant => "restaurants",
            Self::Activity => "activities",
            Self::Tour => "tours",
        }
    }

    /// Entity type used by the ratings endpoints and as the cart item type.
    pub fn entity_type(self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Car => "car",
            Self::Restaurant => "restaurant",
            Self::Activity => "activity",
            Self::Tour => "tour",
        }
    }

    /// Client route for a single entity of this kind.
    pub fn detail_path(self, id: &str) -> String {
        match self {
            Self::Hotel => format!("/hotel/{id}"),
            Self::Car => format!("/car-rental/{id}"),
            Self::Restaurant => format!("/restaurant/{id}"),
            Self::Activity => format!("/activities/{id}"),
            Self::Tour => format!("/tour-packages/{id}"),
        }
    }
}

/// Catalog entry shown on listing cards and detail pages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Nightly, daily, or per-person price depending on the kind.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// One user review of an entity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    /// Star score, 1 through 5.
    pub score: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Ratings for one entity. The default value is what unauthenticated callers see.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingsPayload {
    #[serde(default)]
    pub ratings: Vec<Rating>,
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub count: u32,
}

/// Body of `POST /ratings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewRating {
    pub entity_type: String,
    pub entity_id: String,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body of `POST /bookings/car-rental`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarBookingRequest {
    pub car_id: String,
    /// ISO `YYYY-MM-DD`.
    pub pickup_date: String,
    /// ISO `YYYY-MM-DD`.
    pub dropoff_date: String,
    pub insurance: String,
    pub driver_age: u32,
    pub license_number: String,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Confirmation returned for a created booking.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BookingConfirmation {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Success envelope: `{ data, message }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body: `{ message }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int.to_string());
            }
            if let Some(int) = number.as_u64() {
                return Ok(int.to_string());
            }
            Err(D::Error::custom("expected integer id"))
        }
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
