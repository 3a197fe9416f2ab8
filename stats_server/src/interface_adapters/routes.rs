use crate::interface_adapters::handlers::{artisan_counts, health, platform_stats};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};

// Every public route is served below this prefix.
pub const API_PREFIX: &str = "/api/v1";

pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/artisans/counts", get(artisan_counts))
        .route("/stats", get(platform_stats))
        .route("/stats/", get(platform_stats))
        .with_state(state);

    Router::new().nest(API_PREFIX, api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BookingStatus;
    use crate::domain::ports::{ArtisanDirectory, PlatformMetrics};
    use crate::interface_adapters::state::InMemoryCatalog;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    // Storage adapter that fails every query.
    struct BrokenCatalog;

    #[async_trait]
    impl ArtisanDirectory for BrokenCatalog {
        async fn available_specialties(&self) -> Result<Vec<Option<String>>, String> {
            Err("connection refused".to_string())
        }
    }

    #[async_trait]
    impl PlatformMetrics for BrokenCatalog {
        async fn available_artisan_count(&self) -> Result<u64, String> {
            Err("connection refused".to_string())
        }

        async fn completed_booking_count(&self) -> Result<u64, String> {
            Err("connection refused".to_string())
        }

        async fn average_review_rating(&self) -> Result<Option<f64>, String> {
            Err("connection refused".to_string())
        }
    }

    fn seeded_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_artisan(Some(r#"["Plumber", "Electrician"]"#), true)
            .with_artisan(Some(r#"["plumber"]"#), true)
            .with_artisan(Some(r#"["painter"]"#), false)
            .with_artisan(None, true)
            .with_booking(BookingStatus::Completed)
            .with_booking(BookingStatus::Completed)
            .with_booking(BookingStatus::Pending)
            .with_review(5.0)
            .with_review(4.0)
            .with_review(4.0)
    }

    fn build_test_app() -> Router {
        app(AppState::from_catalog(Arc::new(seeded_catalog())))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("expected request to build");

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        let payload: Value = serde_json::from_slice(&body).expect("expected json body");
        (status, payload)
    }

    #[tokio::test]
    async fn when_counts_are_requested_then_returns_available_counts_with_total() {
        let (status, payload) = get_json(build_test_app(), "/api/v1/artisans/counts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["plumber"], 2);
        assert_eq!(payload["electrician"], 1);
        assert_eq!(payload["total"], 3);
        assert!(payload.get("painter").is_none());
    }

    #[tokio::test]
    async fn when_stats_are_requested_then_returns_counts_and_rounded_rating() {
        let (status, payload) = get_json(build_test_app(), "/api/v1/stats/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["artisan_count"], 3);
        assert_eq!(payload["completed_bookings"], 2);
        assert_eq!(payload["average_rating"], 4.3);
    }

    #[tokio::test]
    async fn when_stats_path_has_no_trailing_slash_then_it_is_served_too() {
        let (status, _) = get_json(build_test_app(), "/api/v1/stats").await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn when_there_are_no_reviews_then_average_rating_is_null() {
        let app = app(AppState::from_catalog(Arc::new(InMemoryCatalog::new())));

        let (status, payload) = get_json(app, "/api/v1/stats/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["artisan_count"], 0);
        assert!(payload["average_rating"].is_null());
    }

    #[tokio::test]
    async fn when_storage_fails_then_returns_502_and_error_message() {
        let app = app(AppState::from_catalog(Arc::new(BrokenCatalog)));

        let (status, payload) = get_json(app.clone(), "/api/v1/artisans/counts").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(payload["message"], "storage error");

        let (status, payload) = get_json(app, "/api/v1/stats/").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(payload["message"], "storage error");
    }

    #[tokio::test]
    async fn when_health_is_requested_then_returns_ok() {
        let (status, payload) = get_json(build_test_app(), "/api/v1/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn when_stats_route_is_called_with_post_then_returns_405() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/stats/")
            .body(Body::empty())
            .expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn when_route_is_outside_api_prefix_then_returns_404() {
        let request = Request::builder()
            .method("GET")
            .uri("/stats/")
            .body(Body::empty())
            .expect("expected request to build");

        let response = build_test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
