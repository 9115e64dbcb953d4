//! Language preference parsing.
//!
//! Turns `Accept-Language` and `Cookie` header values into supported
//! locales. Neither function ever falls back to the default locale; that
//! decision belongs to the resolver.

use crate::models::Locale;

/// Cookie remembering the last locale the visitor browsed in.
pub const LOCALE_COOKIE: &str = "site_locale";

/// Map a language tag onto a supported locale by its primary subtag.
/// Accepts: "ko", "ko-KR", "ko_KR", "zh-Hans-CN", "EN-us", etc.
pub fn match_language_tag(tag: &str) -> Option<Locale> {
    let tag = tag.trim().to_lowercase();
    let primary = tag.split(['-', '_']).next()?;
    Locale::from_code(primary)
}

/// Split an `Accept-Language` value into tags ordered by descending quality.
///
/// Ties keep header order. Entries with `q=0`, the `*` wildcard and
/// malformed quality values are dropped.
pub fn parse_accept_language(header_value: &str) -> Vec<String> {
    let mut weighted: Vec<(String, f32)> = header_value
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let mut quality = 1.0_f32;
            for param in parts {
                if let Some((key, value)) = param.split_once('=')
                    && key.trim().eq_ignore_ascii_case("q")
                {
                    quality = value.trim().parse().ok()?;
                }
            }

            (quality > 0.0).then(|| (tag.to_string(), quality))
        })
        .collect();

    // sort_by is stable, so equal weights keep their header order
    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    weighted.into_iter().map(|(tag, _)| tag).collect()
}

/// First supported locale named by an `Accept-Language` header value.
pub fn locale_from_accept_language(header_value: Option<&str>) -> Option<Locale> {
    parse_accept_language(header_value?)
        .iter()
        .find_map(|tag| match_language_tag(tag))
}

/// Locale stored in the `site_locale` cookie, if present and supported.
pub fn locale_from_cookie(header_value: Option<&str>) -> Option<Locale> {
    header_value?
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == LOCALE_COOKIE)
        .and_then(|(_, value)| Locale::from_code(value.trim().trim_matches('"')))
}
