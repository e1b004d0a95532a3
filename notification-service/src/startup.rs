//! Application startup and lifecycle management.
//!
//! `Application::build` is the single composition point: it wires the
//! notification source into the router and binds the listener.

use crate::config::{CorsConfig, NotificationConfig};
use crate::handlers;
use crate::services::{NotificationSource, SampleNotificationGenerator};
use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: NotificationConfig,
    pub source: Arc<dyn NotificationSource>,
}

/// Build the HTTP router for the given state.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route(
            "/api/v1/notifications/:user_id",
            get(handlers::get_notifications),
        )
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods([Method::GET]);

    if config.allowed_origins.is_empty() || config.allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the sample notification generator.
    pub async fn build(config: NotificationConfig) -> Result<Self, AppError> {
        Self::build_with_source(config, Arc::new(SampleNotificationGenerator::new())).await
    }

    /// Build the application around a specific notification source.
    pub async fn build_with_source(
        config: NotificationConfig,
        source: Arc<dyn NotificationSource>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Notification service listening on port {}", port);

        let state = AppState { config, source };

        Ok(Self {
            port,
            listener,
            router: router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT or SIGTERM, then drain in-flight requests.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
