use crate::interface_adapters::protocol::HealthResponse;
use crate::interface_adapters::render::{CategoriesTemplate, LandingTemplate, StatsTemplate};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{load_category_widget, load_landing_page, load_stats_widget};
use axum::{Json, extract::State};
use std::sync::Arc;

// Full landing page; upstream failures only change the widget contents.
#[tracing::instrument(name = "landing_page", skip_all)]
pub async fn landing_page(State(state): State<Arc<AppState>>) -> LandingTemplate {
    load_landing_page(state.provider.as_ref(), &state.copy)
        .await
        .into()
}

#[tracing::instrument(name = "categories_widget", skip_all)]
pub async fn categories_widget(State(state): State<Arc<AppState>>) -> CategoriesTemplate {
    let categories = load_category_widget(state.provider.as_ref(), &state.copy.categories).await;
    CategoriesTemplate { categories }
}

#[tracing::instrument(name = "stats_widget", skip_all)]
pub async fn stats_widget(State(state): State<Arc<AppState>>) -> StatsTemplate {
    let stats = load_stats_widget(state.provider.as_ref()).await;
    StatsTemplate { stats }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
