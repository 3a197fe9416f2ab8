use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Available artisans per lower-cased trade name, plus a `total` entry.
pub type ArtisanCounts = HashMap<String, u64>;

// Landing page statistics as published by the stats API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlatformStats {
    pub artisan_count: u64,
    pub completed_bookings: u64,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

// A trade advertised in the hero section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    // Key looked up in the counts payload.
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub blurb: String,
}

impl Category {
    pub fn new(key: &str, label: &str, blurb: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            blurb: blurb.to_string(),
        }
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("plumber", "Plumbers", "Leaks, installs and emergency repairs."),
        Category::new("electrician", "Electricians", "Wiring, fittings and safety checks."),
        Category::new("carpenter", "Carpenters", "Furniture, doors and custom woodwork."),
        Category::new("painter", "Painters", "Interior and exterior finishes."),
    ]
}

pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

// The widgets depend on this trait, not on the concrete HTTP client.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn fetch_artisan_counts(&self) -> Result<ArtisanCounts, ProviderError>;
    async fn fetch_platform_stats(&self) -> Result<PlatformStats, ProviderError>;
}
