//! Users API Server
//!
//! Serves CRUD endpoints for users backed by either an in-memory or a
//! PostgreSQL store, chosen at startup from configuration.

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

use users_api::config::{Config, StoreBackend};
use users_api::routes::app_router;
use users_api::state::AppState;
use users_api::store::{InMemoryUserStore, PgUserStore, UserStore};
use users_api::db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!(
        environment = config.environment.as_str(),
        store = ?config.store_backend,
        "Starting users API"
    );

    let user_store = build_store(&config).await?;
    let app = app_router(AppState::new(user_store), &config);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("User routes mounted at {}/users", config.api_base_path);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn UserStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            if config.environment.is_production() {
                tracing::warn!("Running with the in-memory store; data is lost on restart");
            }
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = db::create_pool(config).await?;
            db::run_migrations(&pool).await?;
            Ok(Arc::new(PgUserStore::new(pool)))
        }
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
