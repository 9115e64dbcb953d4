use serde::Serialize;

use crate::models::{ContactChannels, ContactCopy, ContentRecord, Locale, Step};

/// One pre-generated page: a (locale, slug) pair and the path it lives at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StaticParam {
    pub locale: Locale,
    pub slug: String,
    pub path: String,
}

impl StaticParam {
    pub fn new(locale: Locale, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let path = format!("/{}/{}", locale.code(), slug);
        Self { locale, slug, path }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub alternates: Vec<Alternate>,
    pub open_graph: OpenGraph,
    pub robots: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicePage {
    pub locale: Locale,
    pub served_locale: Locale,
    pub fallback: bool,
    pub slug: String,
    pub icon: String,
    pub image: String,
    pub content: ContentRecord,
    pub contact: ContactChannels,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceSummary {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageLink {
    pub code: Locale,
    pub name: &'static str,
    pub flag: &'static str,
    pub href: String,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HowItWorks {
    pub heading: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub locale: Locale,
    pub hero: Hero,
    pub services: Vec<ServiceSummary>,
    pub how_it_works: HowItWorks,
    pub languages: Vec<LanguageLink>,
    pub contact: ContactChannels,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub locale: Locale,
    pub copy: ContactCopy,
    pub channels: ContactChannels,
    pub metadata: PageMetadata,
}
