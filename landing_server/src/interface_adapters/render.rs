// Askama views for the hero section and its widgets.

use crate::use_cases::{CategoryWidget, LandingCopy, LandingPage, StatsWidget};
use askama::Template;
use askama_web::WebTemplate;

/// Full landing page; embeds both widget templates.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub copy: LandingCopy,
    pub categories: CategoryWidget,
    pub stats: StatsWidget,
}

impl From<LandingPage> for LandingTemplate {
    fn from(page: LandingPage) -> Self {
        Self {
            copy: page.copy,
            categories: page.categories,
            stats: page.stats,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "categories.html")]
pub struct CategoriesTemplate {
    pub categories: CategoryWidget,
}

#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub stats: StatsWidget,
}
