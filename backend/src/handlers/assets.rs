use axum::{
    extract::{Path, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::sync::Arc;

use crate::AppState;
use crate::utils::{ApiError, ApiResult};

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

// GET /assets/{*path}
pub async fn serve_asset(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> ApiResult<Response> {
    if !state.config.assets.enabled {
        return Err(ApiError::asset_not_found(path));
    }

    let file = Assets::get(&path).ok_or_else(|| ApiError::asset_not_found(&path))?;
    let content_type = file.metadata.mimetype().to_string();
    let cache_control = format!("public, max-age={}", state.config.assets.max_age);

    tracing::debug!("Serving asset {} ({})", path, content_type);
    Ok(([(CONTENT_TYPE, content_type), (CACHE_CONTROL, cache_control)], file.data).into_response())
}
