use crate::domain::errors::StatsError;
use crate::interface_adapters::protocol::{
    ArtisanCountsResponse, ErrorResponse, HealthResponse, PlatformStatsResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{ArtisanCountsUseCase, PlatformStatsUseCase};
use axum::{Json, extract::State, http::StatusCode};

// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Handler for available artisan counts grouped by specialty.
#[tracing::instrument(name = "artisan_counts", skip_all)]
pub async fn artisan_counts(
    State(state): State<AppState>,
) -> Result<Json<ArtisanCountsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ArtisanCountsUseCase {
        directory: state.directory.clone(),
    };

    let counts = use_case.execute().await.map_err(map_stats_error)?;
    tracing::debug!(total = counts.total, specialties = counts.by_specialty.len(), "counts computed");

    Ok(Json(counts.into_map()))
}

// Handler for the landing page platform statistics.
#[tracing::instrument(name = "platform_stats", skip_all)]
pub async fn platform_stats(
    State(state): State<AppState>,
) -> Result<Json<PlatformStatsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = PlatformStatsUseCase {
        metrics: state.metrics.clone(),
    };

    let stats = use_case.execute().await.map_err(map_stats_error)?;

    Ok(Json(stats.into()))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn map_stats_error(err: StatsError) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(error = %err, "statistics query failed");
    match err {
        StatsError::StorageFailure(_) => error_response(StatusCode::BAD_GATEWAY, "storage error"),
    }
}
