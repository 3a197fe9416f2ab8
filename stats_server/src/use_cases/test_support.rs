use async_trait::async_trait;

use crate::domain::ports::{ArtisanDirectory, PlatformMetrics};

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub specialties: bool,
    pub artisans: bool,
    pub bookings: bool,
    pub ratings: bool,
}

// Canned storage answers for deterministic use-case tests.
#[derive(Clone, Default)]
pub(crate) struct FakeCatalog {
    specialties: Vec<Option<String>>,
    artisan_count: u64,
    completed_bookings: u64,
    average_rating: Option<f64>,
    failures: FailureFlags,
}

impl FakeCatalog {
    pub(crate) fn with_specialties(rows: &[Option<&str>]) -> Self {
        Self {
            specialties: rows.iter().map(|row| row.map(str::to_string)).collect(),
            ..Default::default()
        }
    }

    pub(crate) fn with_metrics(
        mut self,
        artisan_count: u64,
        completed_bookings: u64,
        average_rating: Option<f64>,
    ) -> Self {
        self.artisan_count = artisan_count;
        self.completed_bookings = completed_bookings;
        self.average_rating = average_rating;
        self
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }
}

#[async_trait]
impl ArtisanDirectory for FakeCatalog {
    async fn available_specialties(&self) -> Result<Vec<Option<String>>, String> {
        if self.failures.specialties {
            return Err("specialties query failed".to_string());
        }
        Ok(self.specialties.clone())
    }
}

#[async_trait]
impl PlatformMetrics for FakeCatalog {
    async fn available_artisan_count(&self) -> Result<u64, String> {
        if self.failures.artisans {
            return Err("artisan count failed".to_string());
        }
        Ok(self.artisan_count)
    }

    async fn completed_booking_count(&self) -> Result<u64, String> {
        if self.failures.bookings {
            return Err("booking count failed".to_string());
        }
        Ok(self.completed_bookings)
    }

    async fn average_review_rating(&self) -> Result<Option<f64>, String> {
        if self.failures.ratings {
            return Err("rating average failed".to_string());
        }
        Ok(self.average_rating)
    }
}
