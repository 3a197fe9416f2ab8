use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::BookingStatus;
use crate::domain::ports::{ArtisanDirectory, PlatformMetrics};

// Application state holding the storage ports behind trait objects.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn ArtisanDirectory>,
    pub metrics: Arc<dyn PlatformMetrics>,
}

impl AppState {
    // Wire a single catalog adapter into both ports.
    pub fn from_catalog<C>(catalog: Arc<C>) -> Self
    where
        C: ArtisanDirectory + PlatformMetrics + 'static,
    {
        Self {
            directory: catalog.clone(),
            metrics: catalog,
        }
    }
}

// PostgreSQL-backed catalog reading the platform tables.
#[derive(Clone)]
pub struct PostgresCatalog {
    pub db: PgPool,
}

#[async_trait]
impl ArtisanDirectory for PostgresCatalog {
    async fn available_specialties(&self) -> Result<Vec<Option<String>>, String> {
        sqlx::query_scalar::<_, Option<String>>(
            "SELECT specialties FROM artisans WHERE is_available = TRUE",
        )
        .fetch_all(&self.db)
        .await
        .map_err(|err| err.to_string())
    }
}

#[async_trait]
impl PlatformMetrics for PostgresCatalog {
    async fn available_artisan_count(&self) -> Result<u64, String> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM artisans WHERE is_available = TRUE",
        )
        .fetch_one(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        Ok(count.max(0) as u64)
    }

    async fn completed_booking_count(&self) -> Result<u64, String> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings WHERE status = $1")
            .bind(BookingStatus::Completed.as_str())
            .fetch_one(&self.db)
            .await
            .map_err(|err| err.to_string())?;

        Ok(count.max(0) as u64)
    }

    async fn average_review_rating(&self) -> Result<Option<f64>, String> {
        sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(rating)::FLOAT8 FROM reviews")
            .fetch_one(&self.db)
            .await
            .map_err(|err| err.to_string())
    }
}

// Artisan row as held by the in-memory catalog.
#[derive(Clone, Debug)]
pub struct ArtisanRow {
    pub specialties: Option<String>,
    pub is_available: bool,
}

// In-memory catalog for the `memory` store mode and for tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    pub artisans: Vec<ArtisanRow>,
    pub bookings: Vec<BookingStatus>,
    pub ratings: Vec<f64>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artisan(mut self, specialties: Option<&str>, is_available: bool) -> Self {
        self.artisans.push(ArtisanRow {
            specialties: specialties.map(str::to_string),
            is_available,
        });
        self
    }

    pub fn with_booking(mut self, status: BookingStatus) -> Self {
        self.bookings.push(status);
        self
    }

    pub fn with_review(mut self, rating: f64) -> Self {
        self.ratings.push(rating);
        self
    }

    fn available(&self) -> impl Iterator<Item = &ArtisanRow> {
        self.artisans.iter().filter(|row| row.is_available)
    }
}

#[async_trait]
impl ArtisanDirectory for InMemoryCatalog {
    async fn available_specialties(&self) -> Result<Vec<Option<String>>, String> {
        Ok(self.available().map(|row| row.specialties.clone()).collect())
    }
}

#[async_trait]
impl PlatformMetrics for InMemoryCatalog {
    async fn available_artisan_count(&self) -> Result<u64, String> {
        Ok(self.available().count() as u64)
    }

    async fn completed_booking_count(&self) -> Result<u64, String> {
        Ok(self
            .bookings
            .iter()
            .filter(|status| **status == BookingStatus::Completed)
            .count() as u64)
    }

    async fn average_review_rating(&self) -> Result<Option<f64>, String> {
        if self.ratings.is_empty() {
            return Ok(None);
        }
        let sum: f64 = self.ratings.iter().sum();
        Ok(Some(sum / self.ratings.len() as f64))
    }
}
