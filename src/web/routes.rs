//! HTTP routes for the dashboard
//!
//! Provides API endpoints for the page layout, selection, charts and panel,
//! plus static file serving.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post, put},
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

use crate::catalog::{CATALOG, LEVELS, Level, Rgba, Test};
use crate::panel::PanelState;
use crate::projector::{self, Charts};
use crate::selection::Selection;

use super::error::ApiError;
use super::server::AppState;
use super::widgets::PageLayout;

/// Embedded static assets
#[derive(RustEmbed)]
#[folder = "web-assets/"]
struct Assets;

/// Frontend configuration
#[derive(Serialize)]
struct FrontendConfig {
    api_endpoint: Option<String>,
}

/// A test as listed by the catalog endpoint
#[derive(Serialize)]
struct CatalogTest {
    key: &'static str,
    label: &'static str,
}

/// A level as listed by the catalog endpoint
#[derive(Serialize)]
struct CatalogLevel {
    level: Level,
    rank: u8,
    color: Rgba,
}

#[derive(Serialize)]
struct CatalogResponse {
    tests: Vec<CatalogTest>,
    levels: Vec<CatalogLevel>,
}

/// Body of a single-test update
#[derive(Deserialize)]
struct LevelUpdate {
    level: String,
}

/// Selection together with the charts projected from it
#[derive(Serialize)]
struct SelectionResponse {
    selection: Selection,
    charts: Charts,
}

/// Create API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/config", get(get_config))
        .route("/api/layout", get(get_layout))
        .route("/api/catalog", get(get_catalog))
        .route("/api/selection", get(get_selection))
        .route("/api/selection/reset", post(reset_selection))
        .route("/api/selection/{test}", put(set_level))
        .route("/api/charts", get(get_charts).post(project_charts))
        .route("/api/panel", get(get_panel))
        .route("/api/panel/toggle", post(toggle_panel))
}

/// Create static file routes
pub fn static_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index_html))
        .route("/{*path}", get(static_handler))
}

/// GET /api/health - Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// GET /api/config - Returns frontend configuration
async fn get_config(State(state): State<Arc<AppState>>) -> Json<FrontendConfig> {
    Json(FrontendConfig {
        api_endpoint: state.api_endpoint.clone(),
    })
}

/// GET /api/layout - Headings and one dropdown per test
async fn get_layout(State(state): State<Arc<AppState>>) -> Json<PageLayout> {
    let dashboard = state.dashboard.read().await;
    Json(PageLayout::new(&state.display, &dashboard.selection))
}

/// GET /api/catalog - Tests and levels with their rank and color
async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        tests: CATALOG
            .iter()
            .map(|t| CatalogTest {
                key: t.key(),
                label: t.label(),
            })
            .collect(),
        levels: LEVELS
            .iter()
            .map(|&level| CatalogLevel {
                level,
                rank: level.rank(),
                color: level.color(),
            })
            .collect(),
    })
}

/// GET /api/selection - Current selection
async fn get_selection(State(state): State<Arc<AppState>>) -> Json<Selection> {
    Json(state.dashboard.read().await.selection)
}

/// PUT /api/selection/{test} - Assign a level to one test
async fn set_level(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    body: Result<Json<LevelUpdate>, JsonRejection>,
) -> Result<Json<SelectionResponse>, ApiError> {
    // An unknown test is reported before anything about the body
    let test: Test = key.parse()?;
    let Json(update) = body?;
    let level: Level = update.level.parse()?;

    let mut dashboard = state.dashboard.write().await;
    dashboard.selection.set(test, level);
    tracing::debug!(test = test.key(), %level, "selection updated");

    Ok(Json(SelectionResponse {
        selection: dashboard.selection,
        charts: dashboard.charts(&state.labels),
    }))
}

/// POST /api/selection/reset - Every test back to the default level
async fn reset_selection(State(state): State<Arc<AppState>>) -> Json<SelectionResponse> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.selection = Selection::default();
    tracing::debug!("selection reset");

    Json(SelectionResponse {
        selection: dashboard.selection,
        charts: dashboard.charts(&state.labels),
    })
}

/// GET /api/charts - Charts for the current selection
async fn get_charts(State(state): State<Arc<AppState>>) -> Json<Charts> {
    let dashboard = state.dashboard.read().await;
    Json(dashboard.charts(&state.labels))
}

/// POST /api/charts - Charts for the selection in the body, without touching state
async fn project_charts(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BTreeMap<String, String>>, JsonRejection>,
) -> Result<Json<Charts>, ApiError> {
    let Json(map) = body?;
    let selection = Selection::try_from(map)?;
    Ok(Json(projector::project(&selection, &state.labels)))
}

/// GET /api/panel - Selection panel visibility
async fn get_panel(State(state): State<Arc<AppState>>) -> Json<PanelState> {
    Json(state.dashboard.read().await.panel.into())
}

/// POST /api/panel/toggle - Register a click on the show/hide button
async fn toggle_panel(State(state): State<Arc<AppState>>) -> Json<PanelState> {
    let mut dashboard = state.dashboard.write().await;
    let visibility = dashboard.panel.click();
    tracing::debug!(clicks = dashboard.panel.clicks(), %visibility, "panel toggled");
    Json(dashboard.panel.into())
}

/// GET / - Serve index.html
async fn index_html() -> impl IntoResponse {
    match Assets::get("index.html") {
        Some(content) => Html(content.data.into_owned()).into_response(),
        None => (StatusCode::NOT_FOUND, "index.html not found").into_response(),
    }
}

/// Static file handler for embedded assets
async fn static_handler(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, format!("File not found: {}", path)).into_response(),
    }
}
