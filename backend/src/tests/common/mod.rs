// Common test utilities and helpers

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use std::sync::Arc;
use tower::ServiceExt;

use crate::config::{Config, SiteConfig};
use crate::services::{ContentCatalog, ContentRouter, MetadataBuilder, PageService};
use crate::{AppState, build_router};

pub const TEST_BASE_URL: &str = "https://example.com";
pub const TEST_SITE_NAME: &str = "Test Site";

/// Two services: `aircon-cleaning` is authored in vi and ko only,
/// `tile-painting` in vi only. Site copy exists for vi only.
pub const PARTIAL_SERVICES_TOML: &str = r#"
[[service]]
slug = "aircon-cleaning"
icon = "A"
image = "aircon.jpg"

[service.locales.vi]
title = "Vệ sinh điều hòa"
description = "vi description"
price = "150.000₫"
duration = "1 giờ"

[service.locales.ko]
title = "에어컨 청소"
description = "ko description"
price = "150.000₫"
duration = "1시간"

[[service]]
slug = "tile-painting"
icon = "T"
image = "tile.jpg"

[service.locales.vi]
title = "Sơn nhà"
description = "vi tile description"
price = "200.000₫"
duration = "1 ngày"
"#;

pub const PARTIAL_SITE_TOML: &str = r#"
[contact]
phone = "+84 1"
phone_href = "tel:+841"
whatsapp = "https://wa.me/841"
zalo = "https://zalo.me/841"
email = "test@example.com"

[locales.vi.seo]
title = "Trang chủ"
description = "Mô tả"
keywords = "a, b"

[locales.vi.home]
hero_title = "Xin chào"
hero_subtitle = "Phụ đề"
how_it_works = "Cách thức"
steps = [{ title = "Một", desc = "Bước một" }]

[locales.vi.contact]
title = "Liên hệ"
subtitle = "Gọi ngay"
service_area = "TP.HCM"
"#;

pub fn test_config() -> Config {
    Config {
        site: SiteConfig { base_url: TEST_BASE_URL.to_string(), name: TEST_SITE_NAME.to_string() },
        ..Default::default()
    }
}

pub fn embedded_catalog() -> Arc<ContentCatalog> {
    Arc::new(ContentCatalog::load_embedded().expect("Embedded catalog must load"))
}

pub fn partial_catalog() -> Arc<ContentCatalog> {
    Arc::new(
        ContentCatalog::from_sources(PARTIAL_SERVICES_TOML, PARTIAL_SITE_TOML)
            .expect("Partial catalog must load"),
    )
}

pub fn create_content_router(catalog: Arc<ContentCatalog>) -> ContentRouter {
    ContentRouter::new(catalog)
}

pub fn create_page_service(catalog: Arc<ContentCatalog>) -> PageService {
    let config = test_config();
    PageService::new(ContentRouter::new(catalog), MetadataBuilder::new(&config.site))
}

pub fn create_test_state(config: Config, catalog: Arc<ContentCatalog>) -> Arc<AppState> {
    Arc::new(AppState::new(config, catalog))
}

pub fn create_test_app() -> Router {
    build_router(create_test_state(test_config(), embedded_catalog()))
}

/// GET `uri` with the given headers.
pub async fn get(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).expect("Failed to build request");
    app.oneshot(request).await.expect("Router is infallible")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}
