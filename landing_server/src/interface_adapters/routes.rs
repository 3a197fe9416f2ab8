use crate::interface_adapters::handlers::{
    categories_widget, health, landing_page, stats_widget,
};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Wire the HTTP routes to their handlers.
    Router::new()
        .route("/", get(landing_page))
        .route("/widgets/categories", get(categories_widget))
        .route("/widgets/stats", get(stats_widget))
        .route("/health", get(health))
        .with_state(state)
}
