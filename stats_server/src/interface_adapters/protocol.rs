use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::PlatformStats;

// Flat `specialty -> count` object, including the `total` key.
pub type ArtisanCountsResponse = BTreeMap<String, u64>;

// Response payload for the landing page statistics.
#[derive(Debug, Serialize)]
pub struct PlatformStatsResponse {
    pub artisan_count: u64,
    pub completed_bookings: u64,
    // Serialized as `null` when there are no reviews yet.
    pub average_rating: Option<f64>,
}

impl From<PlatformStats> for PlatformStatsResponse {
    fn from(stats: PlatformStats) -> Self {
        Self {
            artisan_count: stats.artisan_count,
            completed_bookings: stats.completed_bookings,
            average_rating: stats.average_rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
