//! Router assembly and the content page handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use super::{not_found_response, pages, render};
use crate::config::AppConfig;
use crate::content::{Catalog, Difficulty, content_routes};
use crate::error::Result;
use crate::onboarding::OnboardingStore;
use crate::onboarding::routes::{OnboardingRouteState, onboarding_routes};
use crate::store::{Database, LibSqlBackend};

/// Shared state for the page handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub onboarding: Arc<OnboardingStore>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Validate the config, open the database and load the catalog.
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let db: Arc<dyn Database> = Arc::new(LibSqlBackend::new_local(&config.db_path).await?);
        let catalog = Catalog::builtin()?;
        let onboarding = OnboardingStore::new(db, config.user_id.clone(), config.hydrate_timeout);
        Ok(Self {
            config: Arc::new(config),
            onboarding,
            catalog: Arc::new(catalog),
        })
    }
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let onboarding = onboarding_routes(OnboardingRouteState {
        store: Arc::clone(&state.onboarding),
        gate_render_budget: state.config.gate_render_budget,
    });

    Router::new()
        .route("/", get(landing))
        .route("/about", get(about))
        .route("/dashboard", get(dashboard))
        .route("/tricks", get(trick_library))
        .route("/tricks/{slug}", get(trick_detail))
        .route("/tricks/{slug}/practice", get(trick_practice))
        .route("/paths", get(path_list))
        .route("/paths/{slug}", get(path_detail))
        .route("/paths/{slug}/modules/{module_id}", get(module_detail))
        .route("/sitemap.txt", get(sitemap))
        .route("/health", get(health))
        .with_state(state)
        .merge(onboarding)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "service": "yoyo-academy" }))
}

async fn sitemap(State(state): State<AppState>) -> String {
    let mut body = content_routes(&state.catalog).join("\n");
    body.push('\n');
    body
}

async fn fallback() -> Response {
    not_found_response()
}

async fn landing(State(state): State<AppState>) -> impl IntoResponse {
    render(pages::landing(&state.catalog))
}

async fn about() -> impl IntoResponse {
    render(pages::about())
}

async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    state.onboarding.hydrate().await;
    let snapshot = state.onboarding.snapshot();
    render(pages::dashboard(&snapshot.state, &state.catalog))
}

#[derive(Debug, Deserialize)]
struct LibraryQuery {
    difficulty: Option<Difficulty>,
}

async fn trick_library(
    State(state): State<AppState>,
    Query(query): Query<LibraryQuery>,
) -> impl IntoResponse {
    render(pages::trick_library(&state.catalog, query.difficulty))
}

async fn trick_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.catalog.trick(&slug) {
        Some(trick) => render(pages::trick_detail(trick)).into_response(),
        None => not_found_response(),
    }
}

async fn trick_practice(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.catalog.trick(&slug) {
        Some(trick) => render(pages::trick_practice(trick)).into_response(),
        None => not_found_response(),
    }
}

async fn path_list(State(state): State<AppState>) -> impl IntoResponse {
    render(pages::path_list(&state.catalog))
}

async fn path_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.catalog.path(&slug) {
        Some(path) => render(pages::path_detail(path)).into_response(),
        None => not_found_response(),
    }
}

async fn module_detail(
    State(state): State<AppState>,
    Path((slug, module_id)): Path<(String, String)>,
) -> Response {
    match state.catalog.module(&slug, &module_id) {
        Some((path, module)) => {
            render(pages::module_detail(&state.catalog, path, module)).into_response()
        }
        None => not_found_response(),
    }
}
