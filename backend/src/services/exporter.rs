//! Static export of every page as JSON.

use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Locale;
use crate::services::page_service::{CONTACT_SLUG, PageService};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub out_dir: PathBuf,
}

/// Write `{out}/{locale}/index.json`, `{out}/{locale}/contact/index.json`,
/// `{out}/{locale}/{slug}/index.json` and the `{out}/routes.json` manifest.
pub fn export_site(pages: &PageService, out_dir: &Path) -> anyhow::Result<ExportSummary> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut routes = Vec::new();

    for locale in Locale::ALL {
        let home = format!("/{}", locale.code());
        write_page(out_dir, &home, &pages.home(locale))?;
        routes.push(home);

        let contact = format!("/{}/{}", locale.code(), CONTACT_SLUG);
        write_page(out_dir, &contact, &pages.contact(locale))?;
        routes.push(contact);
    }

    for param in pages.router().static_params() {
        let page = pages.service(param.locale, &param.slug)?;
        write_page(out_dir, &param.path, &page)?;
        routes.push(param.path);
    }

    let manifest = out_dir.join("routes.json");
    fs::write(&manifest, serde_json::to_string_pretty(&routes)?)
        .with_context(|| format!("Failed to write {}", manifest.display()))?;

    tracing::info!("Exported {} pages to {}", routes.len(), out_dir.display());
    Ok(ExportSummary { pages: routes.len(), out_dir: out_dir.to_path_buf() })
}

fn write_page<T: Serialize>(out_dir: &Path, route: &str, page: &T) -> anyhow::Result<()> {
    let dir = out_dir.join(route.trim_start_matches('/'));
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let file = dir.join("index.json");
    fs::write(&file, serde_json::to_string_pretty(page)?)
        .with_context(|| format!("Failed to write {}", file.display()))?;

    tracing::debug!("Wrote {}", file.display());
    Ok(())
}
