use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Localized payload of a service page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub title: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub process: Vec<String>,
}

/// One `[[service]]` entry of `services.toml`, before locale keys are checked.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSource {
    pub slug: String,
    pub icon: String,
    pub image: String,
    #[serde(default)]
    pub locales: BTreeMap<String, ContentRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServicesFile {
    #[serde(default, rename = "service")]
    pub services: Vec<ServiceSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoCopy {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeCopy {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub how_it_works: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCopy {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub opening_hours: Vec<String>,
    pub service_area: String,
    #[serde(default)]
    pub guarantees: Vec<String>,
}

/// Everything on the site that is localized but not tied to a service slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteCopy {
    pub seo: SeoCopy,
    pub home: HomeCopy,
    pub contact: ContactCopy,
}

/// Contact channels, identical in every locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannels {
    pub phone: String,
    pub phone_href: String,
    pub whatsapp: String,
    pub zalo: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteFile {
    pub contact: ContactChannels,
    #[serde(default)]
    pub locales: BTreeMap<String, SiteCopy>,
}
