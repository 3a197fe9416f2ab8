use serde::{Deserialize, Serialize};

use crate::domain::format::STAT_PLACEHOLDER;
use crate::domain::{
    Category, PlatformStats, StatsProvider, format_count, format_rating, format_total,
};

// Call-to-action link in the hero section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

// Static marketing copy plus the trades to advertise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingCopy {
    pub headline: String,
    pub subheadline: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
    pub categories: Vec<Category>,
}

impl Default for LandingCopy {
    fn default() -> Self {
        Self {
            headline: "Find trusted artisans near you".to_string(),
            subheadline: "Book verified plumbers, electricians, carpenters and painters, \
                          with payment held safely until the job is done."
                .to_string(),
            primary_cta: CallToAction {
                label: "Book an artisan".to_string(),
                href: "/artisans".to_string(),
            },
            secondary_cta: CallToAction {
                label: "Join as an artisan".to_string(),
                href: "/register?role=artisan".to_string(),
            },
            categories: crate::domain::default_categories(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryCard {
    pub category: Category,
    pub count: Option<u64>,
}

impl CategoryCard {
    pub fn availability(&self) -> String {
        format_count(self.count)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryWidget {
    pub cards: Vec<CategoryCard>,
}

// Statistics bar; `None` when the stats payload could not be loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsWidget {
    pub stats: Option<PlatformStats>,
}

impl StatsWidget {
    pub fn artisans(&self) -> String {
        self.stats
            .as_ref()
            .map_or_else(|| STAT_PLACEHOLDER.to_string(), |s| format_total(s.artisan_count))
    }

    pub fn completed_bookings(&self) -> String {
        self.stats
            .as_ref()
            .map_or_else(|| STAT_PLACEHOLDER.to_string(), |s| format_total(s.completed_bookings))
    }

    pub fn rating(&self) -> String {
        format_rating(self.stats.as_ref().and_then(|s| s.average_rating))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LandingPage {
    pub copy: LandingCopy,
    pub categories: CategoryWidget,
    pub stats: StatsWidget,
}

// One counts fetch; on failure every card falls back to its placeholder.
pub async fn load_category_widget<P>(provider: &P, categories: &[Category]) -> CategoryWidget
where
    P: StatsProvider + ?Sized,
{
    let counts = match provider.fetch_artisan_counts().await {
        Ok(counts) => Some(counts),
        Err(err) => {
            tracing::warn!(error = %err, "artisan counts unavailable");
            None
        }
    };

    let cards = categories
        .iter()
        .map(|category| CategoryCard {
            category: category.clone(),
            count: counts
                .as_ref()
                .and_then(|counts| counts.get(&category.key).copied()),
        })
        .collect();

    CategoryWidget { cards }
}

// One stats fetch; on failure the widget renders placeholders.
pub async fn load_stats_widget<P>(provider: &P) -> StatsWidget
where
    P: StatsProvider + ?Sized,
{
    match provider.fetch_platform_stats().await {
        Ok(stats) => StatsWidget { stats: Some(stats) },
        Err(err) => {
            tracing::warn!(error = %err, "platform stats unavailable");
            StatsWidget { stats: None }
        }
    }
}

// Both widgets load concurrently and fail independently.
pub async fn load_landing_page<P>(provider: &P, copy: &LandingCopy) -> LandingPage
where
    P: StatsProvider + ?Sized,
{
    let (categories, stats) = tokio::join!(
        load_category_widget(provider, &copy.categories),
        load_stats_widget(provider),
    );

    LandingPage {
        copy: copy.clone(),
        categories,
        stats,
    }
}
