// Domain layer: payload shapes, the provider port and display rules.

pub mod format;
pub mod stats;

pub use format::{format_count, format_rating, format_total};
pub use stats::{
    ArtisanCounts, Category, PlatformStats, ProviderError, StatsProvider, default_categories,
};
