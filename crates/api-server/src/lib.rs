//! Auth API Library
//!
//! HTTP front end for registration, login and the token-protected profile
//! endpoint.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use common::ServiceConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the application router over a fresh in-memory user store.
pub fn build_app(config: &ApiConfig) -> axum::Router {
    let auth_service = auth_service_lib::build_service(&config.auth);
    create_router(AppState::new(auth_service))
}

/// Bind the configured host and port. Host names such as `localhost` are
/// resolved, not just literal IP addresses.
pub async fn bind_listener(service: &ServiceConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind((service.host.as_str(), service.port)).await
}

/// Run the HTTP server with the given configuration until shutdown.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let listener = bind_listener(&config.service).await?;
    let addr = listener.local_addr()?;
    info!(
        service = %config.service.service_name,
        token_ttl_hours = config.auth.jwt.expiration_hours,
        bcrypt_cost = config.auth.credentials.bcrypt_cost,
        "Server running on {}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
