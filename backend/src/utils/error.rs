use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_i18n::t;
use serde::Serialize;
use thiserror::Error;

use crate::models::Locale;

/// Request-time errors, rendered as localized JSON bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    // Resource errors 3xxx
    #[error("Page not found: /{locale}/{slug}")]
    PageNotFound { locale: Locale, slug: String },

    #[error("Asset not found: {0}")]
    AssetNotFound(String),
}

impl ApiError {
    pub fn page_not_found(locale: Locale, slug: impl Into<String>) -> Self {
        Self::PageNotFound { locale, slug: slug.into() }
    }

    pub fn asset_not_found(path: impl Into<String>) -> Self {
        Self::AssetNotFound(path.into())
    }

    pub fn error_code(&self) -> i32 {
        match self {
            Self::PageNotFound { .. } => 3001,
            Self::AssetNotFound(_) => 3002,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::PageNotFound { .. } | Self::AssetNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Locale the message should be rendered in.
    pub fn locale(&self) -> Locale {
        match self {
            Self::PageNotFound { locale, .. } => *locale,
            _ => Locale::DEFAULT,
        }
    }

    pub fn localized_message(&self) -> String {
        let locale = self.locale().code();
        match self {
            Self::PageNotFound { slug, .. } => {
                t!("page.not_found", locale = locale, slug = slug).to_string()
            },
            Self::AssetNotFound(path) => {
                t!("asset.not_found", locale = locale, path = path).to_string()
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!("Responding {}: {}", status, self);

        let response = ApiErrorResponse { code: self.error_code(), message: self.localized_message() };

        (status, Json(response)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
