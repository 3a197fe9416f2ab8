use async_trait::async_trait;
use std::sync::Arc;

// Port for reading artisan directory data used by the counts use case.
#[async_trait]
pub trait ArtisanDirectory: Send + Sync {
    // Raw `specialties` column of every available artisan, one entry per artisan.
    async fn available_specialties(&self) -> Result<Vec<Option<String>>, String>;
}

// Port for the aggregate figures shown on the landing page.
#[async_trait]
pub trait PlatformMetrics: Send + Sync {
    async fn available_artisan_count(&self) -> Result<u64, String>;
    async fn completed_booking_count(&self) -> Result<u64, String>;
    // Mean of all review ratings, `None` when there are no reviews.
    async fn average_review_rating(&self) -> Result<Option<f64>, String>;
}

// Shared adapters held in app state satisfy the ports directly.
#[async_trait]
impl<T: ArtisanDirectory + ?Sized> ArtisanDirectory for Arc<T> {
    async fn available_specialties(&self) -> Result<Vec<Option<String>>, String> {
        (**self).available_specialties().await
    }
}

#[async_trait]
impl<T: PlatformMetrics + ?Sized> PlatformMetrics for Arc<T> {
    async fn available_artisan_count(&self) -> Result<u64, String> {
        (**self).available_artisan_count().await
    }

    async fn completed_booking_count(&self) -> Result<u64, String> {
        (**self).completed_booking_count().await
    }

    async fn average_review_rating(&self) -> Result<Option<f64>, String> {
        (**self).average_review_rating().await
    }
}
