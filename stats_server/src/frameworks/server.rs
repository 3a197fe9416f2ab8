// Framework bootstrap for the statistics service.

use crate::frameworks::{config, db};
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::{AppState, InMemoryCatalog, PostgresCatalog};
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

// Serve the API on an already-bound listener.
pub async fn run(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = app(state);

    tracing::info!(%address, "listening");

    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let state = build_state().await?;
    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

async fn build_state() -> Result<AppState> {
    let store = config::store_kind().map_err(std::io::Error::other)?;

    match store {
        config::StoreKind::Memory => {
            tracing::warn!("serving statistics from an empty in-memory catalog");
            Ok(AppState::from_catalog(Arc::new(InMemoryCatalog::new())))
        }
        config::StoreKind::Postgres => {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;

            let pool = db::connect_pool(&database_url, config::database_max_connections())
                .await
                .map_err(|e| std::io::Error::other(format!("failed to connect to database: {e}")))?;

            db::run_migrations(&pool)
                .await
                .map_err(|e| std::io::Error::other(format!("failed to run migrations: {e}")))?;
            tracing::debug!("database migrations applied");

            Ok(AppState::from_catalog(Arc::new(PostgresCatalog { db: pool })))
        }
    }
}
