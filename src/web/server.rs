//! Web server for the dashboard
//!
//! Provides an HTTP server using Axum to serve the dashboard UI
//! and JSON API endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::DisplaySection;
use crate::panel::PanelToggle;
use crate::projector::{self, ChartLabels, Charts};
use crate::selection::Selection;

use super::routes;

/// Interactive state of one dashboard
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub selection: Selection,
    pub panel: PanelToggle,
}

impl Dashboard {
    /// Project the current selection
    pub fn charts(&self, labels: &ChartLabels) -> Charts {
        projector::project(&self.selection, labels)
    }
}

/// Shared application state
pub struct AppState {
    pub dashboard: RwLock<Dashboard>,
    pub display: DisplaySection,
    pub labels: ChartLabels,
    pub api_endpoint: Option<String>,
}

impl AppState {
    pub fn new(display: DisplaySection, api_endpoint: Option<String>) -> Self {
        Self {
            dashboard: RwLock::new(Dashboard::default()),
            labels: display.chart_labels(),
            display,
            api_endpoint,
        }
    }
}

/// Configuration for the web server
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub open_browser: bool,
    pub api_endpoint: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8050)),
            open_browser: true,
            api_endpoint: None,
        }
    }
}

/// Assemble the router with all API and static routes
pub fn build_router(state: Arc<AppState>) -> Router {
    // A separately deployed frontend calls the API cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::api_routes())
        .merge(routes::static_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server and serve the dashboard until Ctrl+C
pub async fn start_server(
    display: DisplaySection,
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = Arc::new(AppState::new(display, config.api_endpoint.clone()));
    let app = build_router(state);

    let listener = TcpListener::bind(config.addr).await?;
    let local_addr = listener.local_addr()?;

    let url = if local_addr.ip().is_unspecified() {
        format!("http://localhost:{}", local_addr.port())
    } else {
        format!("http://{}", local_addr)
    };
    tracing::info!("Starting web server at {}", url);

    if config.open_browser {
        tracing::info!("Opening browser...");
        if let Err(e) = open::that(&url) {
            tracing::warn!("Could not open browser: {}", e);
            tracing::warn!("Please open {} manually", url);
        }
    }

    tracing::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
