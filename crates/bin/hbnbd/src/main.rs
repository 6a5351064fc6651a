//! # hbnbd — HBnB API daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`hbnb.toml`, env vars)
//! - Initialise `tracing` from the configured filter
//! - Pick the storage backend: `SQLite` (pool + migrations) or in-memory
//! - Construct the application service, injecting storage via the port trait
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use axum::ServiceExt;
use axum::extract::Request;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use hbnb_adapter_http_axum::router;
use hbnb_adapter_http_axum::state::AppState;
use hbnb_adapter_storage_memory::MemoryStorage;
use hbnb_adapter_storage_sqlite_sqlx::SqliteStorage;
use hbnb_app::ports::Storage;
use hbnb_app::services::resource_service::ResourceService;

use crate::config::{Backend, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    match config.storage.backend {
        Backend::Sqlite => {
            let db = hbnb_adapter_storage_sqlite_sqlx::Config {
                database_url: config.database_url().to_string(),
            }
            .build()
            .await?;
            tracing::info!(url = config.database_url(), "database ready");
            serve(&config, SqliteStorage::new(db.pool().clone())).await
        }
        Backend::Memory => serve(&config, MemoryStorage::new()).await,
    }
}

async fn serve<S>(config: &Config, storage: S) -> anyhow::Result<()>
where
    S: Storage + Send + Sync + 'static,
{
    let state = AppState::new(ResourceService::new(storage));
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        addr = %bind_addr,
        backend = %config.storage.backend,
        "hbnbd listening"
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("hbnbd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
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
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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

    tracing::info!("shutdown signal received, draining connections");
}
