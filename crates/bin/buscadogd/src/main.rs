//! # buscadogd — BuscaDog API daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialize logging
//! - Build the `PostgreSQL` connection pool and verify the server answers
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its port
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), closing the pool last
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::time::Duration;

use anyhow::Context;

use buscadog_adapter_http_axum::router;
use buscadog_adapter_http_axum::state::AppState;
use buscadog_adapter_storage_postgres_sqlx::{Config as StorageConfig, PgClinicRepository};
use buscadog_app::services::clinic_service::ClinicService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.logging.filter)
                .context("invalid log filter")?,
        )
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url(),
        max_connections: config.database.pool_max,
        acquire_timeout: Duration::from_secs(config.database.connect_timeout_secs),
        idle_timeout: Duration::from_secs(config.database.idle_timeout_secs),
    }
    .build()
    .context("building database pool")?;
    db.ping().await.context("database is unreachable")?;
    tracing::info!("database connection verified");

    // Repository and service
    let clinic_repo = PgClinicRepository::new(db.pool().clone());
    let clinic_service = ClinicService::new(clinic_repo);

    // HTTP
    let app = router::build(AppState::new(clinic_service));

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "buscadogd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving")?;

    db.close().await;
    tracing::info!("database pool closed, exiting");

    Ok(())
}

/// Resolves when the process receives SIGINT (Ctrl-C) or SIGTERM.
///
/// A handler that fails to install is logged and ignored; the other one
/// can still trigger the shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
