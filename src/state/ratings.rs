//! Rating aggregation for the review panel.
//!
//! The breakdown bars are sized from actual per-star counts in the fetched
//! ratings, highest star first.

#[cfg(test)]
#[path = "ratings_test.rs"]
mod ratings_test;

use crate::net::types::{Rating, RatingsPayload};

/// One bar of the star breakdown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarBucket {
    pub stars: u8,
    pub count: u32,
    /// Share of all ratings, 0 to 100.
    pub percent: f64,
}

/// Per-star counts for 5 down to 1. Scores outside 1..=5 are ignored.
pub fn rating_breakdown(ratings: &[Rating]) -> [StarBucket; 5] {
    let mut counts = [0_u32; 5];
    for rating in ratings {
        if (1..=5).contains(&rating.score) {
            counts[usize::from(rating.score - 1)] += 1;
        }
    }
    let total: u32 = counts.iter().sum();
    std::array::from_fn(|i| {
        let stars = 5 - u8::try_from(i).unwrap_or(0);
        let count = counts[usize::from(stars - 1)];
        let percent = if total == 0 { 0.0 } else { f64::from(count) * 100.0 / f64::from(total) };
        StarBucket { stars, count, percent }
    })
}

/// Mean of valid scores, or `None` without any.
pub fn average_score(ratings: &[Rating]) -> Option<f64> {
    let scores: Vec<f64> =
        ratings.iter().filter(|r| (1..=5).contains(&r.score)).map(|r| f64::from(r.score)).collect();
    if scores.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let len = scores.len() as f64;
    Some(scores.iter().sum::<f64>() / len)
}

/// Average to display: the server's when it reports one, else computed locally.
pub fn display_average(payload: &RatingsPayload) -> Option<f64> {
    if payload.count > 0 && payload.average > 0.0 {
        return Some(payload.average);
    }
    average_score(&payload.ratings)
}

/// Validate a star score picked in the rating form.
pub fn validate_score(score: u8) -> Result<u8, &'static str> {
    if (1..=5).contains(&score) { Ok(score) } else { Err("Pick between 1 and 5 stars.") }
}
