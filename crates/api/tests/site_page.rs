//! Integration tests for the public landing page at `/`.

mod common;

use axum::http::StatusCode;
use common::{body_text, break_store, get, post_json};
use serde_json::json;
use sqlx::PgPool;
use vela_core::content::DEFAULT_HERO_TITLE;

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_store_renders_defaults(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains(DEFAULT_HERO_TITLE));
    assert!(html.contains("EXCEPTIONAL FEATURES"));
    assert!(html.contains("LUXURIOUS INTERIORS"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_failure_still_renders_defaults(pool: PgPool) {
    break_store(&pool).await;

    let response = get(common::build_test_app(pool), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(DEFAULT_HERO_TITLE));
    assert!(!html.contains("Failed"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn saved_content_is_merged_over_defaults(pool: PgPool) {
    let payload = json!({
        "hero": { "title": "OCEAN TOWER" },
        "features": [{ "title": "Rooftop Pool", "description": "Heated", "image": "/pool.jpg" }],
        "footer": { "tagline": "", "socialLinks": { "facebook": "", "twitter": "https://x.example/vela" } }
    });
    post_json(common::build_test_app(pool.clone()), "/api/content", payload).await;

    let html = body_text(get(common::build_test_app(pool), "/").await).await;

    assert!(html.contains("OCEAN TOWER"));
    assert!(!html.contains(DEFAULT_HERO_TITLE));
    // Sibling hero fields come from the defaults.
    assert!(html.contains("Experience the epitome of sophistication in the heart of the city"));
    // Features are replaced wholesale.
    assert!(html.contains("Rooftop Pool"));
    assert!(!html.contains("Luxurious Living Spaces"));
    // Empty tagline falls back; empty social links are hidden.
    assert!(html.contains("Experience Luxury Living"));
    assert!(!html.contains(r#"aria-label="Facebook""#));
    assert!(html.contains("https://x.example/vela"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_document_renders_defaults(pool: PgPool) {
    post_json(
        common::build_test_app(pool.clone()),
        "/api/content",
        json!({ "hero": { "title": "BROKEN" }, "features": "not a list" }),
    )
    .await;

    let response = get(common::build_test_app(pool), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(DEFAULT_HERO_TITLE));
    assert!(!html.contains("BROKEN"));
}
