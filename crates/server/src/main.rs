//! Dresshaus storefront API server.
//!
//! Serves the catalog, cart, order, and account endpoints over HTTP with
//! JSON flat-file persistence. One process owns the data directory;
//! concurrent writers are out of scope (last writer wins).

#![cfg_attr(not(test), forbid(unsafe_code))]

use dresshaus_server::build_router;
use dresshaus_server::config::ServerConfig;
use dresshaus_server::state::AppState;
use dresshaus_server::store::JsonStore;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dresshaus_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Set up the record store
    let store = JsonStore::new(&config.data_dir);
    store
        .ensure_data_dir()
        .expect("Failed to create data directory");
    tracing::info!(data_dir = %config.data_dir.display(), "record store ready");

    let addr = config.socket_addr();
    let app = build_router(AppState::new(config, store));

    tracing::info!("storefront API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
