pub mod catalog;
pub mod content_router;
pub mod exporter;
pub mod locale_resolver;
pub mod metadata;
pub mod page_service;

pub use catalog::{CatalogError, ContentCatalog, Localized, ServiceEntry};
pub use content_router::{ContentRouter, ResolvedContent};
pub use exporter::{ExportSummary, export_site};
pub use locale_resolver::{LocalePreference, LocaleSource, ResolvedLocale};
pub use metadata::MetadataBuilder;
pub use page_service::PageService;
