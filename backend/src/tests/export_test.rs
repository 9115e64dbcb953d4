use std::fs;

use crate::models::Locale;
use crate::services::export_site;
use crate::tests::common::{create_page_service, embedded_catalog};

#[test]
fn test_export_writes_every_page_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let pages = create_page_service(embedded_catalog());
    let slug_count = pages.router().catalog().slugs().count();

    let summary = export_site(&pages, dir.path()).unwrap();
    assert_eq!(summary.pages, Locale::ALL.len() * (slug_count + 2));

    for locale in Locale::ALL {
        let root = dir.path().join(locale.code());
        assert!(root.join("index.json").is_file());
        assert!(root.join("contact/index.json").is_file());
        for slug in pages.router().catalog().slugs() {
            assert!(root.join(slug).join("index.json").is_file(), "missing {}/{}", locale, slug);
        }
    }

    let manifest: Vec<String> =
        serde_json::from_str(&fs::read_to_string(dir.path().join("routes.json")).unwrap()).unwrap();
    assert_eq!(manifest.len(), summary.pages);
    assert_eq!(manifest[0], "/vi");
    assert!(manifest.contains(&"/ko/aircon-cleaning".to_string()));

    let page: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("ko/aircon-cleaning/index.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(page["content"]["title"], "에어컨 청소/보수");
}

#[test]
fn test_export_is_reproducible() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let pages = create_page_service(embedded_catalog());

    export_site(&pages, first.path()).unwrap();
    export_site(&pages, second.path()).unwrap();

    for route in ["routes.json", "vi/index.json", "ja/contact/index.json", "en/leak-inspection/index.json"] {
        let a = fs::read(first.path().join(route)).unwrap();
        let b = fs::read(second.path().join(route)).unwrap();
        assert_eq!(a, b, "{} differs between exports", route);
    }
}
