//! Assembles page payloads from the catalog.

use crate::models::{
    ContactPage, Hero, HomePage, HowItWorks, LanguageLink, Locale, ServicePage, ServiceSummary,
};
use crate::services::content_router::ContentRouter;
use crate::services::metadata::{MetadataBuilder, PageText};
use crate::utils::ApiResult;

pub const CONTACT_SLUG: &str = "contact";

#[derive(Debug, Clone)]
pub struct PageService {
    router: ContentRouter,
    metadata: MetadataBuilder,
}

impl PageService {
    pub fn new(router: ContentRouter, metadata: MetadataBuilder) -> Self {
        Self { router, metadata }
    }

    pub fn router(&self) -> &ContentRouter {
        &self.router
    }

    pub fn home(&self, locale: Locale) -> HomePage {
        let catalog = self.router.catalog();
        let (copy, _) = catalog.site_copy(locale);

        let services = catalog
            .services()
            .iter()
            .map(|service| {
                let (record, _) = service.records.resolve(locale);
                ServiceSummary {
                    slug: service.slug.clone(),
                    title: record.title.clone(),
                    description: record.description.clone(),
                    icon: service.icon.clone(),
                    href: format!("/{}/{}", locale.code(), service.slug),
                }
            })
            .collect();

        let languages = Locale::ALL
            .into_iter()
            .map(|lang| LanguageLink {
                code: lang,
                name: lang.native_name(),
                flag: lang.flag(),
                href: format!("/{}", lang.code()),
                current: lang == locale,
            })
            .collect();

        let metadata = self.metadata.build(
            locale,
            None,
            PageText {
                title: &copy.seo.title,
                description: &copy.seo.description,
                keywords: &copy.seo.keywords,
            },
        );

        HomePage {
            locale,
            hero: Hero {
                title: copy.home.hero_title.clone(),
                subtitle: copy.home.hero_subtitle.clone(),
            },
            services,
            how_it_works: HowItWorks {
                heading: copy.home.how_it_works.clone(),
                steps: copy.home.steps.clone(),
            },
            languages,
            contact: catalog.contact().clone(),
            metadata,
        }
    }

    pub fn contact(&self, locale: Locale) -> ContactPage {
        let catalog = self.router.catalog();
        let (copy, _) = catalog.site_copy(locale);

        let title = format!("{} | {}", copy.contact.title, copy.seo.title);
        let metadata = self.metadata.build(
            locale,
            Some(CONTACT_SLUG),
            PageText {
                title: &title,
                description: &copy.contact.subtitle,
                keywords: &copy.seo.keywords,
            },
        );

        ContactPage {
            locale,
            copy: copy.contact.clone(),
            channels: catalog.contact().clone(),
            metadata,
        }
    }

    /// Service page for a slug; unknown slugs are not found in every locale.
    pub fn service(&self, locale: Locale, slug: &str) -> ApiResult<ServicePage> {
        let resolved = self.router.resolve(locale, slug)?;
        let (copy, _) = self.router.catalog().site_copy(locale);

        let title = format!("{} | {}", resolved.record.title, self.metadata.site_name());
        let metadata = self.metadata.build(
            locale,
            Some(slug),
            PageText {
                title: &title,
                description: &resolved.record.description,
                keywords: &copy.seo.keywords,
            },
        );

        Ok(ServicePage {
            locale,
            served_locale: resolved.served,
            fallback: resolved.is_fallback(),
            slug: resolved.service.slug.clone(),
            icon: resolved.service.icon.clone(),
            image: resolved.service.image.clone(),
            content: resolved.record.clone(),
            contact: self.router.catalog().contact().clone(),
            metadata,
        })
    }
}
