use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;
use crate::models::{Locale, StaticParam};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub locales: usize,
    pub services: usize,
}

// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        locales: Locale::ALL.len(),
        services: state.pages.router().catalog().services().len(),
    })
}

// GET /api/routes
pub async fn list_routes(State(state): State<Arc<AppState>>) -> Json<Vec<StaticParam>> {
    let routes = state.pages.router().static_params();
    tracing::debug!("Listing {} static routes", routes.len());
    Json(routes)
}
