//! Mercadito Storefront - QR-driven product catalog.
//!
//! This binary serves the public storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with Askama templates for server-side rendering
//! - Catalog loaded once per process from a static table or a published
//!   spreadsheet CSV export
//! - Per-session cart in tower-sessions (in-memory store)
//! - Checkout hands off to a prefilled WhatsApp deep link

#![cfg_attr(not(test), forbid(unsafe_code))]

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mercadito_storefront::config::StorefrontConfig;
use mercadito_storefront::state::AppState;
use mercadito_storefront::{middleware, routes};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mercadito_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state
    let state = AppState::new(config.clone());

    // Warm the catalog cache. A failure here is not fatal: the source is
    // retried on the next request and surfaced to the user there.
    match state.catalog().load().await {
        Ok(catalog) => tracing::info!(products = catalog.len(), "catalog warmed"),
        Err(e) => tracing::warn!("catalog not available at startup: {e}"),
    }

    // Create session layer
    let session_layer = middleware::create_session_layer(&config);

    // Build router
    let app = routes::routes()
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

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
