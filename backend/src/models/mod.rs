pub mod content;
pub mod locale;
pub mod page;

pub use content::{
    ContactChannels, ContactCopy, ContentRecord, HomeCopy, SeoCopy, ServiceSource, ServicesFile,
    SiteCopy, SiteFile, Step,
};
pub use locale::{Locale, UnsupportedLocale};
pub use page::{
    Alternate, ContactPage, Hero, HomePage, HowItWorks, LanguageLink, OgImage, OpenGraph,
    PageMetadata, ServicePage, ServiceSummary, StaticParam,
};
