// Shared helpers for running both services on ephemeral ports inside a test.
use landing_server::LandingConfig;
use stats_server::{AppState, InMemoryCatalog};
use std::sync::Arc;
use std::time::Duration;

async fn bind_ephemeral() -> (tokio::net::TcpListener, String) {
    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    (listener, format!("http://{addr}"))
}

// Start the stats API over the given catalog and return its versioned base URL.
pub async fn spawn_stats_server(catalog: InMemoryCatalog) -> String {
    let (listener, base_url) = bind_ephemeral().await;
    let state = AppState::from_catalog(Arc::new(catalog));
    tokio::spawn(async move {
        stats_server::run(listener, state).await.expect("stats server failed");
    });
    format!("{base_url}/api/v1")
}

// Start the landing server against `api_base_url` and return its base URL.
pub async fn spawn_landing_server(api_base_url: &str) -> String {
    let (listener, base_url) = bind_ephemeral().await;
    let config = LandingConfig {
        api_base_url: api_base_url.to_string(),
        request_timeout_ms: 1000,
        ..Default::default()
    };
    tokio::spawn(async move {
        landing_server::run(listener, config).await.expect("landing server failed");
    });
    base_url
}

// Stats API stand-in answering both payload routes with `200` and a fixed body.
pub async fn spawn_stub_api(body: &'static str) -> String {
    use axum::{Router, http::header, routing::get};

    let (listener, base_url) = bind_ephemeral().await;
    let respond = move || async move { ([(header::CONTENT_TYPE, "application/json")], body) };
    let app = Router::new()
        .route("/api/v1/artisans/counts", get(respond))
        .route("/api/v1/stats/", get(respond));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub api failed");
    });
    format!("{base_url}/api/v1")
}

// An address nothing listens on: bound once, then released.
pub async fn unreachable_api() -> String {
    let (listener, base_url) = bind_ephemeral().await;
    drop(listener);
    format!("{base_url}/api/v1")
}

pub fn http() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("build test http client")
}
