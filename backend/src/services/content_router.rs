use std::sync::Arc;

use crate::models::{ContentRecord, Locale, StaticParam};
use crate::services::catalog::{ContentCatalog, ServiceEntry};
use crate::utils::{ApiError, ApiResult};

/// A service record resolved for a requested locale.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedContent<'a> {
    pub service: &'a ServiceEntry,
    pub record: &'a ContentRecord,
    pub requested: Locale,
    pub served: Locale,
}

impl ResolvedContent<'_> {
    /// Whether the default locale's record stands in for a missing one.
    pub fn is_fallback(&self) -> bool {
        self.requested != self.served
    }
}

/// Maps (locale, slug) onto catalog records.
///
/// Cloning is cheap; the catalog is shared.
#[derive(Debug, Clone)]
pub struct ContentRouter {
    catalog: Arc<ContentCatalog>,
}

impl ContentRouter {
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Resolve a slug for a locale.
    ///
    /// An unknown slug is a terminal not-found whatever the locale. A known
    /// slug without a record for `locale` is served from the default locale.
    pub fn resolve(&self, locale: Locale, slug: &str) -> ApiResult<ResolvedContent<'_>> {
        let service = self.catalog.service(slug).ok_or_else(|| {
            tracing::debug!("No service for slug '{}' (locale {})", slug, locale);
            ApiError::page_not_found(locale, slug)
        })?;

        let (record, served) = service.records.resolve(locale);
        if served != locale {
            tracing::debug!(
                "Service '{}' has no '{}' record, serving '{}' instead",
                slug,
                locale,
                served
            );
        }

        Ok(ResolvedContent { service, record, requested: locale, served })
    }

    /// Every (locale, slug) pair to pre-generate: locales in priority order,
    /// slugs in catalog order.
    pub fn static_params(&self) -> Vec<StaticParam> {
        Locale::ALL
            .into_iter()
            .flat_map(|locale| self.catalog.slugs().map(move |slug| StaticParam::new(locale, slug)))
            .collect()
    }
}
