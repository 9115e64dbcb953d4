use crate::config::SiteConfig;
use crate::models::{Alternate, Locale, OgImage, OpenGraph, PageMetadata};

pub const OG_IMAGE_PATH: &str = "/assets/og-image.jpg";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
const ROBOTS: &str = "index, follow";

/// Builds SEO metadata for locale-scoped pages.
#[derive(Debug, Clone)]
pub struct MetadataBuilder {
    base_url: String,
    site_name: String,
}

/// Localized text of a single page.
#[derive(Debug, Clone, Copy)]
pub struct PageText<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub keywords: &'a str,
}

impl MetadataBuilder {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            base_url: site.base_url.trim_end_matches('/').to_string(),
            site_name: site.name.clone(),
        }
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// `{base_url}/{locale}` or `{base_url}/{locale}/{subpath}`.
    pub fn url(&self, locale: Locale, subpath: Option<&str>) -> String {
        match subpath {
            Some(subpath) => format!("{}/{}/{}", self.base_url, locale.code(), subpath),
            None => format!("{}/{}", self.base_url, locale.code()),
        }
    }

    /// Metadata for the page at `subpath` under `locale` (`None` for the home page).
    pub fn build(&self, locale: Locale, subpath: Option<&str>, text: PageText<'_>) -> PageMetadata {
        let canonical = self.url(locale, subpath);

        let mut alternates: Vec<Alternate> = Locale::ALL
            .into_iter()
            .map(|alt| Alternate { hreflang: alt.code().to_string(), href: self.url(alt, subpath) })
            .collect();
        alternates.push(Alternate {
            hreflang: "x-default".to_string(),
            href: self.url(Locale::DEFAULT, subpath),
        });

        let open_graph = OpenGraph {
            title: text.title.to_string(),
            description: text.description.to_string(),
            url: canonical.clone(),
            site_name: self.site_name.clone(),
            locale: locale.og_locale().to_string(),
            kind: "website".to_string(),
            images: vec![OgImage {
                url: format!("{}{}", self.base_url, OG_IMAGE_PATH),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: text.title.to_string(),
            }],
        };

        PageMetadata {
            title: text.title.to_string(),
            description: text.description.to_string(),
            keywords: text.keywords.to_string(),
            canonical,
            alternates,
            open_graph,
            robots: ROBOTS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> MetadataBuilder {
        MetadataBuilder::new(&SiteConfig {
            base_url: "https://example.com".to_string(),
            name: "Example".to_string(),
        })
    }

    const TEXT: PageText<'static> =
        PageText { title: "Aircon | Example", description: "desc", keywords: "k1, k2" };

    #[test]
    fn test_canonical_and_alternates() {
        let meta = builder().build(Locale::Ko, Some("aircon-cleaning"), TEXT);
        assert_eq!(meta.canonical, "https://example.com/ko/aircon-cleaning");
        assert_eq!(meta.alternates.len(), Locale::ALL.len() + 1);
        assert_eq!(meta.alternates[0].href, "https://example.com/vi/aircon-cleaning");

        let x_default = meta.alternates.last().unwrap();
        assert_eq!(x_default.hreflang, "x-default");
        assert_eq!(x_default.href, "https://example.com/vi/aircon-cleaning");
    }

    #[test]
    fn test_home_urls_have_no_trailing_segment() {
        let meta = builder().build(Locale::En, None, TEXT);
        assert_eq!(meta.canonical, "https://example.com/en");
        assert!(meta.alternates.iter().any(|a| a.hreflang == "ja" && a.href == "https://example.com/ja"));
    }

    #[test]
    fn test_open_graph_fields() {
        let meta = builder().build(Locale::Ja, Some("contact"), TEXT);
        assert_eq!(meta.open_graph.locale, "ja_JP");
        assert_eq!(meta.open_graph.kind, "website");
        assert_eq!(meta.open_graph.site_name, "Example");
        assert_eq!(meta.open_graph.url, meta.canonical);
        assert_eq!(meta.open_graph.images[0].url, "https://example.com/assets/og-image.jpg");
        assert_eq!((meta.open_graph.images[0].width, meta.open_graph.images[0].height), (1200, 630));
        assert_eq!(meta.robots, "index, follow");
    }
}
