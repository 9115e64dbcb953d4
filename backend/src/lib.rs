// Localized home-repair site server: locale-prefixed routing over an
// embedded, validated content catalog.

rust_i18n::i18n!("locales", fallback = "vi");

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{ContentCatalog, ContentRouter, MetadataBuilder, PageService};

/// Application shared state
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub pages: PageService,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<ContentCatalog>) -> Self {
        let router = ContentRouter::new(catalog);
        let metadata = MetadataBuilder::new(&config.site);
        Self { config, pages: PageService::new(router, metadata) }
    }
}

/// Build the HTTP router.
///
/// API and asset routes are matched before the locale-prefixed page routes;
/// the locale middleware wraps every route and the fallback.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::api::health))
        .route("/routes", get(handlers::api::list_routes));

    Router::new()
        .nest("/api", api_routes)
        .route("/assets/*path", get(handlers::assets::serve_asset))
        .route("/:locale", get(handlers::pages::home))
        .route("/:locale/*rest", get(handlers::pages::locale_page))
        .fallback(handlers::pages::not_found)
        .layer(axum::middleware::from_fn(middleware::locale_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
