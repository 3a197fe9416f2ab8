use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{ArtisanCounts, PlatformStats, ProviderError, StatsProvider};

// Canned provider that records how often each payload was fetched.
#[derive(Clone, Default)]
pub(crate) struct FakeProvider {
    counts: Option<ArtisanCounts>,
    stats: Option<PlatformStats>,
    counts_calls: Arc<AtomicUsize>,
    stats_calls: Arc<AtomicUsize>,
}

impl FakeProvider {
    pub(crate) fn new() -> Self {
        Self {
            counts: Some(HashMap::new()),
            ..Default::default()
        }
    }

    pub(crate) fn with_counts(mut self, counts: &[(&str, u64)]) -> Self {
        self.counts = Some(
            counts
                .iter()
                .map(|(key, value)| (key.to_string(), *value))
                .collect(),
        );
        self
    }

    pub(crate) fn with_stats(mut self, stats: PlatformStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub(crate) fn failing_counts(mut self) -> Self {
        self.counts = None;
        self
    }

    pub(crate) fn failing_stats(mut self) -> Self {
        self.stats = None;
        self
    }

    pub(crate) fn counts_calls(&self) -> usize {
        self.counts_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsProvider for FakeProvider {
    async fn fetch_artisan_counts(&self) -> Result<ArtisanCounts, ProviderError> {
        self.counts_calls.fetch_add(1, Ordering::SeqCst);
        self.counts.clone().ok_or_else(|| "counts unavailable".into())
    }

    async fn fetch_platform_stats(&self) -> Result<PlatformStats, ProviderError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        self.stats.clone().ok_or_else(|| "stats unavailable".into())
    }
}
