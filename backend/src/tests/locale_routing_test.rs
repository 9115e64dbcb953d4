use axum::http::StatusCode;

use crate::AppState;
use crate::build_router;
use crate::tests::common::{
    body_json, create_test_app, create_test_state, embedded_catalog, get, header, test_config,
};

#[tokio::test]
async fn test_prefixed_path_serves_localized_page() {
    let response = get(create_test_app(), "/ko/aircon-cleaning", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "set-cookie").is_some_and(|c| c.starts_with("site_locale=ko;")));

    let body = body_json(response).await;
    assert_eq!(body["locale"], "ko");
    assert_eq!(body["served_locale"], "ko");
    assert_eq!(body["fallback"], false);
    assert_eq!(body["content"]["title"], "에어컨 청소/보수");
}

#[tokio::test]
async fn test_prefix_wins_over_preferences() {
    let response = get(
        create_test_app(),
        "/en/plumbing-repair",
        &[("accept-language", "ja"), ("cookie", "site_locale=zh")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["locale"], "en");
}

#[tokio::test]
async fn test_unprefixed_path_redirects_by_accept_language() {
    let response = get(
        create_test_app(),
        "/aircon-cleaning",
        &[("accept-language", "fr-FR, ja-JP;q=0.9, en;q=0.8")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, "location"), Some("/ja/aircon-cleaning"));
    assert_eq!(header(&response, "vary"), Some("Accept-Language, Cookie"));
}

#[tokio::test]
async fn test_root_redirects_to_default_locale() {
    let response = get(create_test_app(), "/", &[]).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, "location"), Some("/vi"));
}

#[tokio::test]
async fn test_trailing_slash_locale_root_redirects_to_home() {
    let app = create_test_app();

    let response =
        get(app.clone(), "/vi/?ref=ad", &[("cookie", "site_locale=en"), ("accept-language", "ko")])
            .await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, "location"), Some("/vi?ref=ad"));

    let response = get(app, "/vi", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["locale"], "vi");
}

#[tokio::test]
async fn test_trailing_slash_service_path_is_served() {
    let response = get(create_test_app(), "/ko/aircon-cleaning/", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["slug"], "aircon-cleaning");
}

#[tokio::test]
async fn test_redirect_prefers_cookie_and_keeps_query() {
    let response = get(
        create_test_app(),
        "/contact?ref=ad",
        &[("cookie", "theme=dark; site_locale=en"), ("accept-language", "ko")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, "location"), Some("/en/contact?ref=ad"));
}

#[tokio::test]
async fn test_unknown_locale_segment_redirects_then_not_found() {
    let app = create_test_app();

    let response = get(app.clone(), "/xx/aircon-cleaning", &[]).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, "location"), Some("/vi/xx/aircon-cleaning"));

    let response = get(app, "/vi/xx/aircon-cleaning", &[]).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], 3001);
}

#[tokio::test]
async fn test_not_found_message_follows_request_locale() {
    let app = create_test_app();

    let en = get(app.clone(), "/en/roof-repair", &[]).await;
    assert_eq!(en.status(), StatusCode::NOT_FOUND);
    let en = body_json(en).await;

    let ko = get(app, "/ko/roof-repair", &[]).await;
    assert_eq!(ko.status(), StatusCode::NOT_FOUND);
    let ko = body_json(ko).await;

    assert!(en["message"].as_str().unwrap().contains("roof-repair"));
    assert!(ko["message"].as_str().unwrap().contains("roof-repair"));
    assert_ne!(en["message"], ko["message"]);
}

#[tokio::test]
async fn test_matching_cookie_is_not_reissued() {
    let response = get(create_test_app(), "/en", &[("cookie", "site_locale=en")]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "set-cookie").is_none());
}

#[tokio::test]
async fn test_home_and_contact_pages() {
    let app = create_test_app();

    let home = get(app.clone(), "/ja", &[]).await;
    assert_eq!(home.status(), StatusCode::OK);
    let home = body_json(home).await;
    assert_eq!(home["locale"], "ja");
    assert_eq!(home["services"].as_array().unwrap().len(), 5);
    assert_eq!(home["metadata"]["canonical"], "https://example.com/ja");

    let contact = get(app, "/vi/contact", &[]).await;
    assert_eq!(contact.status(), StatusCode::OK);
    let contact = body_json(contact).await;
    assert_eq!(contact["copy"]["title"], "Liên hệ");
    assert_eq!(contact["channels"]["email"], "info@suatruasaigon.com");
}

#[tokio::test]
async fn test_api_routes_bypass_locale_resolution() {
    let app = create_test_app();

    let health = get(app.clone(), "/api/health", &[("accept-language", "ko")]).await;
    assert_eq!(health.status(), StatusCode::OK);
    assert!(header(&health, "set-cookie").is_none());
    let health = body_json(health).await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["locales"], 5);
    assert_eq!(health["services"], 5);

    let routes = body_json(get(app, "/api/routes", &[]).await).await;
    let routes = routes.as_array().unwrap();
    assert_eq!(routes.len(), 25);
    assert_eq!(routes[0]["locale"], "vi");
    assert_eq!(routes[0]["slug"], "aircon-cleaning");
    assert_eq!(routes[0]["path"], "/vi/aircon-cleaning");
}

#[tokio::test]
async fn test_file_requests_are_not_redirected() {
    let response = get(create_test_app(), "/favicon.ico", &[]).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(header(&response, "location").is_none());
}

#[tokio::test]
async fn test_embedded_asset_is_served() {
    let response = get(create_test_app(), "/assets/site.css", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "content-type"), Some("text/css"));
    assert_eq!(header(&response, "cache-control"), Some("public, max-age=3600"));

    let missing = get(create_test_app(), "/assets/missing.css", &[]).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(missing).await["code"], 3002);
}

#[tokio::test]
async fn test_og_image_is_embedded() {
    let response = get(create_test_app(), "/assets/og-image.jpg", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "content-type"), Some("image/jpeg"));
}

#[tokio::test]
async fn test_assets_can_be_disabled() {
    let mut config = test_config();
    config.assets.enabled = false;
    let state: std::sync::Arc<AppState> = create_test_state(config, embedded_catalog());

    let response = get(build_router(state), "/assets/site.css", &[]).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
