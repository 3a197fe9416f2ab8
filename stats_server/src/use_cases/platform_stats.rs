use crate::domain::entities::PlatformStats;
use crate::domain::errors::StatsError;
use crate::domain::ports::PlatformMetrics;

// Platform statistics use case with injected dependencies.
pub struct PlatformStatsUseCase<M> {
    pub metrics: M,
}

impl<M> PlatformStatsUseCase<M>
where
    M: PlatformMetrics,
{
    pub async fn execute(&self) -> Result<PlatformStats, StatsError> {
        let (artisan_count, completed_bookings, average) = tokio::try_join!(
            self.metrics.available_artisan_count(),
            self.metrics.completed_booking_count(),
            self.metrics.average_review_rating(),
        )
        .map_err(StatsError::StorageFailure)?;

        Ok(PlatformStats {
            artisan_count,
            completed_bookings,
            average_rating: average.and_then(round_rating),
        })
    }
}

// One decimal place, ties to even on the exact binary value; a zero mean is
// reported as no rating at all.
fn round_rating(mean: f64) -> Option<f64> {
    if mean == 0.0 || !mean.is_finite() {
        return None;
    }
    format!("{mean:.1}").parse().ok()
}
