// ABOUTME: HTTP surface for caterd: router assembly, auth middleware, and the serve loop.
// ABOUTME: Applies the CORS allow-list and runs until SIGINT/SIGTERM.

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

use axum::http::{HeaderValue, Method};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::net::TcpListener;
use tokio::signal::{self, unix::SignalKind};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use app_state::{AppState, SharedState};
pub use auth::TokenService;
pub use config::{Config, ConfigError};
pub use routes::create_router;

/// Bind and serve the API until a shutdown signal arrives.
pub async fn serve(config: &Config, state: SharedState) -> std::io::Result<()> {
    let app = create_router(state)
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!("listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Cross-origin policy from the configured allow-list. A `*` entry opens the
/// API to any origin; otherwise only the listed origins are permitted.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        let list: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(list)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        tracing::info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
        tracing::info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
