use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{middleware, routing::get, Router};
use mission_common::SystemConfig;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{info, warn};

use crate::{
    middleware::{get_tracing_layer, logging_middleware},
    routes,
    upstream::{ApiKey, NasaClient},
};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub nasa: Arc<NasaClient>,
}

pub struct MissionServer {
    config: SystemConfig,
    state: AppState,
}

impl MissionServer {
    pub fn new(config: SystemConfig, api_key: ApiKey) -> Result<Self> {
        if api_key.is_demo() {
            warn!("No API key configured, falling back to NASA's rate-limited DEMO_KEY");
        }

        let nasa =
            NasaClient::new(&config.gateway, api_key).context("Failed to build NASA client")?;
        Ok(Self {
            config,
            state: AppState { nasa: Arc::new(nasa) },
        })
    }

    /// JSON endpoints, with the public directory as the fallback
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(routes::health::health_check))
            .route("/apod", get(routes::apod::image_of_the_day))
            .route("/roverData/manifests", get(routes::manifests::rover_manifests))
            .route("/photos/:rover/:sol", get(routes::photos::rover_photos))
            .fallback_service(ServeDir::new(&self.config.gateway.public_dir))
            .layer(middleware::from_fn(logging_middleware))
            .layer(get_tracing_layer())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        let local = listener.local_addr()?;
        info!(
            public_dir = %self.config.gateway.public_dir.display(),
            "NASA app is live on http://{}/",
            local
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Gateway server error")?;

        info!("Gateway shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
