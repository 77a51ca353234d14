//! Server binary: load config, bootstrap the store, serve the kurban routes.

use kurban_api::{app, bootstrap, config, AppState, MemoryKurbanStore, PgKurbanStore, StoreKind};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kurban_api=info,tower_http=info")),
        )
        .init();
    tracing::debug!(?config, "configuration loaded");

    let state = match config.store {
        StoreKind::Postgres => AppState::new(PgKurbanStore::new(bootstrap(&config.database).await?)),
        StoreKind::Memory => {
            tracing::warn!("using in-memory store, records are lost on exit");
            AppState::new(MemoryKurbanStore::new())
        }
    };

    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, config.server.body_limit))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
