//! Immutable content catalog.
//!
//! Built once at startup from the TOML sources embedded in the binary and
//! shared read-only afterwards. Every structural invariant is checked here so
//! that request-time lookups cannot fail for a known slug.

use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::models::{
    ContactChannels, ContentRecord, Locale, ServiceSource, ServicesFile, SiteCopy, SiteFile,
    UnsupportedLocale,
};

const SERVICES_TOML: &str = include_str!("../../content/services.toml");
const SITE_TOML: &str = include_str!("../../content/site.toml");

/// Slugs that name dedicated pages and cannot be used for services.
pub const RESERVED_SLUGS: &[&str] = &["contact"];

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Service slug '{0}' is declared more than once")]
    DuplicateSlug(String),

    #[error("Service slug '{0}' is not URL-safe")]
    InvalidSlug(String),

    #[error("Service slug '{0}' collides with a reserved page")]
    ReservedSlug(String),

    #[error("Unknown locale '{locale}' in {context}")]
    UnknownLocale { locale: String, context: String },

    #[error("Service '{slug}' has no record for the default locale '{default}'")]
    MissingDefaultRecord { slug: String, default: Locale },

    #[error("Site copy has no entry for the default locale '{0}'")]
    MissingDefaultSiteCopy(Locale),
}

/// A value present for the default locale and optionally for others.
#[derive(Debug, Clone)]
pub struct Localized<T> {
    default: T,
    translations: HashMap<Locale, T>,
}

impl<T> Localized<T> {
    /// Returns `None` when the default locale has no value.
    pub fn from_map(mut values: BTreeMap<Locale, T>) -> Option<Self> {
        let default = values.remove(&Locale::DEFAULT)?;
        Some(Self { default, translations: values.into_iter().collect() })
    }

    /// Exact lookup, no fallback.
    pub fn get(&self, locale: Locale) -> Option<&T> {
        if locale.is_default() { Some(&self.default) } else { self.translations.get(&locale) }
    }

    /// Lookup falling back to the default locale. Returns the value and the
    /// locale it was actually authored in.
    pub fn resolve(&self, locale: Locale) -> (&T, Locale) {
        match self.get(locale) {
            Some(value) => (value, locale),
            None => (&self.default, Locale::DEFAULT),
        }
    }

    /// Locales with an authored value, in priority order.
    pub fn locales(&self) -> Vec<Locale> {
        Locale::ALL.into_iter().filter(|locale| self.get(*locale).is_some()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct ServiceEntry {
    pub slug: String,
    pub icon: String,
    pub image: String,
    pub records: Localized<ContentRecord>,
}

#[derive(Debug, Clone)]
pub struct ContentCatalog {
    services: Vec<ServiceEntry>,
    slug_index: HashMap<String, usize>,
    site: Localized<SiteCopy>,
    contact: ContactChannels,
}

impl ContentCatalog {
    /// Load the catalog compiled into the binary.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_sources(SERVICES_TOML, SITE_TOML)
    }

    pub fn from_sources(services_toml: &str, site_toml: &str) -> Result<Self, CatalogError> {
        let services: ServicesFile = toml::from_str(services_toml).map_err(|e| {
            CatalogError::Parse { file: "services.toml".to_string(), message: e.to_string() }
        })?;
        let site: SiteFile = toml::from_str(site_toml).map_err(|e| CatalogError::Parse {
            file: "site.toml".to_string(),
            message: e.to_string(),
        })?;

        Self::from_parts(services.services, site)
    }

    pub fn from_parts(sources: Vec<ServiceSource>, site: SiteFile) -> Result<Self, CatalogError> {
        let mut services = Vec::with_capacity(sources.len());
        let mut slug_index = HashMap::with_capacity(sources.len());

        for source in sources {
            validate_slug(&source.slug)?;
            if slug_index.contains_key(&source.slug) {
                return Err(CatalogError::DuplicateSlug(source.slug));
            }

            let context = format!("service '{}'", source.slug);
            let records = Localized::from_map(parse_locale_keys(source.locales, &context)?)
                .ok_or_else(|| CatalogError::MissingDefaultRecord {
                    slug: source.slug.clone(),
                    default: Locale::DEFAULT,
                })?;

            slug_index.insert(source.slug.clone(), services.len());
            services.push(ServiceEntry {
                slug: source.slug,
                icon: source.icon,
                image: source.image,
                records,
            });
        }

        let site_copy = Localized::from_map(parse_locale_keys(site.locales, "site copy")?)
            .ok_or(CatalogError::MissingDefaultSiteCopy(Locale::DEFAULT))?;

        Ok(Self { services, slug_index, site: site_copy, contact: site.contact })
    }

    pub fn service(&self, slug: &str) -> Option<&ServiceEntry> {
        self.slug_index.get(slug).map(|&index| &self.services[index])
    }

    /// Services in declaration order.
    pub fn services(&self) -> &[ServiceEntry] {
        &self.services
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|service| service.slug.as_str())
    }

    pub fn site_copy(&self, locale: Locale) -> (&SiteCopy, Locale) {
        self.site.resolve(locale)
    }

    pub fn contact(&self) -> &ContactChannels {
        &self.contact
    }

    /// Number of (slug, locale) pairs that will be served through fallback.
    pub fn missing_translations(&self) -> usize {
        self.services
            .iter()
            .map(|service| Locale::ALL.len() - service.records.locales().len())
            .sum()
    }
}

fn validate_slug(slug: &str) -> Result<(), CatalogError> {
    let url_safe = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !url_safe {
        return Err(CatalogError::InvalidSlug(slug.to_string()));
    }
    if RESERVED_SLUGS.contains(&slug) {
        return Err(CatalogError::ReservedSlug(slug.to_string()));
    }
    Ok(())
}

fn parse_locale_keys<T>(
    values: BTreeMap<String, T>,
    context: &str,
) -> Result<BTreeMap<Locale, T>, CatalogError> {
    values
        .into_iter()
        .map(|(code, value)| -> Result<(Locale, T), CatalogError> {
            let locale = code.parse::<Locale>().map_err(|UnsupportedLocale(locale)| {
                CatalogError::UnknownLocale { locale, context: context.to_string() }
            })?;
            Ok((locale, value))
        })
        .collect()
}
