// Use cases: the landing page figures computed over the storage ports.

pub mod artisan_counts;
pub mod platform_stats;

#[cfg(test)]
pub(crate) mod test_support;

pub use artisan_counts::ArtisanCountsUseCase;
pub use platform_stats::PlatformStatsUseCase;
