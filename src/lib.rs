//! Team Roster Backend
//!
//! Stateless REST backend that resolves member card styles and lays out
//! roster exports for the team dashboard.

pub mod api;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod styling;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use export::{JsonLayoutSerializer, LayoutSerializer, SlideGeometry};
use styling::Palette;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub palette: &'static Palette,
    pub geometry: Arc<SlideGeometry>,
    pub serializer: Arc<dyn LayoutSerializer>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            palette: Palette::standard(),
            geometry: Arc::new(SlideGeometry::with_rows_per_slide(config.slide_rows)),
            serializer: Arc::new(JsonLayoutSerializer),
        }
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Cards
        .route("/cards/style", post(api::resolve_card))
        .route("/cards/styles", post(api::resolve_cards))
        // Badges
        .route("/badges/overlay", get(api::badge_overlay))
        .route("/badges/selectable", post(api::list_selectable_badges))
        // Members
        .route("/members/customize", post(api::customize_member))
        // Projects
        .route("/projects/groups", post(api::project_groups))
        // Announcements
        .route("/announcements/feed", post(api::announcement_feed))
        // Export
        .route("/export", post(api::export_layout))
        .route("/export/download", post(api::export_download));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
