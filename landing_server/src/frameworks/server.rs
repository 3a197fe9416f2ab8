// Framework bootstrap for the landing page server.

use crate::frameworks::config::{self, LandingConfig};
use crate::interface_adapters::clients::StatsApiClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, config: LandingConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(config)?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let config = LandingConfig::load().map_err(std::io::Error::other)?;
    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

fn build_state(config: LandingConfig) -> Result<Arc<AppState>> {
    let client = StatsApiClient::new(config.api_base_url.clone(), config.request_timeout())
        .map_err(|e| std::io::Error::other(format!("failed to initialize stats client: {e}")))?;
    tracing::debug!(
        api_base_url = %client.base_url,
        request_timeout_ms = config.request_timeout_ms,
        "stats client configured"
    );

    Ok(Arc::new(AppState {
        provider: Arc::new(client),
        copy: Arc::new(config.copy),
    }))
}
