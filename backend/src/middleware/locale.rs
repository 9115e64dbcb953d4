//! Locale resolution middleware
//!
//! Requests under a locale prefix continue with the locale stored in request
//! extensions. Any other page request is redirected to its canonical,
//! locale-prefixed path.

use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE, VARY},
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::services::locale_resolver::{self, LocalePreference};
use crate::utils::{LOCALE_COOKIE, locale_from_cookie};

const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

pub async fn locale_middleware(mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    if locale_resolver::is_bypassed(&path) {
        return next.run(req).await;
    }

    let headers = req.headers();
    let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok());
    let preference = LocalePreference {
        cookie,
        accept_language: headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
    };
    let remembered = locale_from_cookie(cookie);
    let resolved = locale_resolver::resolve(&path, &preference);

    if !resolved.needs_redirect(&path) {
        let locale = resolved.locale;
        req.extensions_mut().insert(locale);

        let mut response = next.run(req).await;
        if remembered != Some(locale) {
            let cookie = format!(
                "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                LOCALE_COOKIE,
                locale.code(),
                COOKIE_MAX_AGE_SECS
            );
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        return response;
    }

    let location = match req.uri().query() {
        Some(query) => format!("{}?{}", resolved.canonical_path, query),
        None => resolved.canonical_path,
    };
    tracing::debug!(
        "Redirecting {} to {} (locale {} from {:?})",
        path,
        location,
        resolved.locale,
        resolved.source
    );

    ([(VARY, "Accept-Language, Cookie")], Redirect::temporary(&location)).into_response()
}
