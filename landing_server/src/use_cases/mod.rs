// Use cases: loading the landing page widgets through the provider port.

pub mod widgets;

#[cfg(test)]
pub(crate) mod test_support;

pub use widgets::{
    CallToAction, CategoryCard, CategoryWidget, LandingCopy, LandingPage, StatsWidget,
    load_category_widget, load_landing_page, load_stats_widget,
};
