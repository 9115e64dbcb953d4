//! Locale resolution for incoming request paths.
//!
//! Pure functions: the middleware feeds them the path and the preference
//! headers, and turns the outcome into a pass-through or a redirect.

use crate::models::Locale;
use crate::utils::{locale_from_accept_language, locale_from_cookie};

/// Path prefixes that never carry a locale.
pub const BYPASS_PREFIXES: &[&str] = &["/api", "/assets"];

/// Language preference signals carried by a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalePreference<'a> {
    pub cookie: Option<&'a str>,
    pub accept_language: Option<&'a str>,
}

/// Where the resolved locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Path,
    Cookie,
    AcceptLanguage,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub locale: Locale,
    pub source: LocaleSource,
    /// Path with the locale as its first segment.
    pub canonical_path: String,
}

impl ResolvedLocale {
    /// True when the request path already starts with the locale.
    pub fn is_canonical(&self) -> bool {
        self.source == LocaleSource::Path
    }

    /// True when the request must be redirected to `canonical_path`.
    pub fn needs_redirect(&self, path: &str) -> bool {
        self.canonical_path != path
    }
}

/// Whether a path skips locale resolution: API and asset prefixes, and
/// file-like paths whose last segment contains a dot.
pub fn is_bypassed(path: &str) -> bool {
    let under_prefix = BYPASS_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix).is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    });
    let is_file = path.rsplit('/').next().is_some_and(|segment| segment.contains('.'));

    under_prefix || is_file
}

/// First path segment, if it names a supported locale exactly.
pub fn path_locale(path: &str) -> Option<Locale> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    trimmed.split('/').next().and_then(Locale::from_code)
}

/// Resolve the locale of a request path.
///
/// 1. A first segment that is a supported locale wins as-is; a bare locale
///    root with trailing slashes (`/en/`) canonicalizes to `/en`.
/// 2. Otherwise the locale cookie, then `Accept-Language`.
/// 3. Otherwise the default locale.
pub fn resolve(path: &str, preference: &LocalePreference<'_>) -> ResolvedLocale {
    if let Some(locale) = path_locale(path) {
        let root = format!("/{}", locale.code());
        let canonical_path = if path.trim_end_matches('/') == root { root } else { path.to_string() };
        return ResolvedLocale { locale, source: LocaleSource::Path, canonical_path };
    }

    let (locale, source) = if let Some(locale) = locale_from_cookie(preference.cookie) {
        (locale, LocaleSource::Cookie)
    } else if let Some(locale) = locale_from_accept_language(preference.accept_language) {
        (locale, LocaleSource::AcceptLanguage)
    } else {
        (Locale::DEFAULT, LocaleSource::Default)
    };

    ResolvedLocale { locale, source, canonical_path: prefix_path(locale, path) }
}

/// `/{locale}{path}`; the root maps to `/{locale}`.
pub fn prefix_path(locale: Locale, path: &str) -> String {
    let rest = path.trim_start_matches('/');
    if rest.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{}", locale.code(), rest)
    }
}
