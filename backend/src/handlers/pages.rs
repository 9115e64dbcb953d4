use axum::{
    Extension, Json,
    extract::{Path, State},
    http::Uri,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::AppState;
use crate::models::{HomePage, Locale};
use crate::services::page_service::CONTACT_SLUG;
use crate::utils::{ApiError, ApiResult};

// The locale extension is only absent for file-like paths that skipped
// resolution, e.g. /favicon.ico.

// GET /{locale}
pub async fn home(
    State(state): State<Arc<AppState>>,
    locale: Option<Extension<Locale>>,
    Path(segment): Path<String>,
) -> ApiResult<Json<HomePage>> {
    let Some(Extension(locale)) = locale else {
        return Err(ApiError::page_not_found(Locale::DEFAULT, segment));
    };

    tracing::debug!("Rendering home page: locale={}", locale);
    Ok(Json(state.pages.home(locale)))
}

// GET /{locale}/{*rest}: the contact page or a service page
pub async fn locale_page(
    State(state): State<Arc<AppState>>,
    locale: Option<Extension<Locale>>,
    Path((_, rest)): Path<(String, String)>,
) -> ApiResult<Response> {
    let slug = rest.trim_matches('/');
    let Some(Extension(locale)) = locale else {
        return Err(ApiError::page_not_found(Locale::DEFAULT, slug));
    };

    match slug {
        CONTACT_SLUG => {
            tracing::debug!("Rendering contact page: locale={}", locale);
            Ok(Json(state.pages.contact(locale)).into_response())
        },
        _ => {
            tracing::debug!("Rendering service page: locale={}, slug={}", locale, slug);
            let page = state.pages.service(locale, slug)?;
            Ok(Json(page).into_response())
        },
    }
}

/// Fallback for unmatched paths, rendered in the request locale when known.
pub async fn not_found(locale: Option<Extension<Locale>>, uri: Uri) -> ApiError {
    let locale = locale.map(|Extension(locale)| locale).unwrap_or(Locale::DEFAULT);
    let path = uri.path();
    let slug = path
        .strip_prefix('/')
        .and_then(|rest| rest.strip_prefix(locale.code()))
        .unwrap_or(path)
        .trim_matches('/');

    tracing::debug!("No route for {}", path);
    ApiError::page_not_found(locale, slug)
}
