//! HTTP-level integration tests for the `/api/integrations` endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    admin_token, body_json, build_test_app, build_test_app_with, config_with_uploads,
    delete_auth, get, multipart_auth, post_json_auth, put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

async fn create(app: axum::Router, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(app, "/api/integrations/admin", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_name_and_category(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/integrations/admin",
        json!({ "category": "chat" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "name is required");
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let response = post_json_auth(
        app,
        "/api/integrations/admin",
        json!({ "name": "Slack" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "category is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_multipart_without_name_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = multipart_auth(
        app,
        Method::POST,
        "/api/integrations/admin",
        &[("category", "chat"), ("unknown_field", "ignored")],
        None,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_list_orders_filters_and_localizes(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    create(
        app.clone(),
        &token,
        json!({ "name": "Zapier", "category": "automation", "display_order": 2 }),
    )
    .await;
    create(
        app.clone(),
        &token,
        json!({
            "name": "Slack",
            "category": "chat",
            "display_order": 1,
            "description": "Team chat",
            "description_es": "Chat de equipo",
        }),
    )
    .await;
    create(
        app.clone(),
        &token,
        json!({ "name": "Hidden", "category": "chat", "is_active": false }),
    )
    .await;

    let json = body_json(get(app.clone(), "/api/integrations?lang=es").await).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Slack", "Zapier"]);
    assert_eq!(json["data"][0]["description"], "Chat de equipo");

    let json = body_json(get(app.clone(), "/api/integrations?category=chat").await).await;
    assert_eq!(json["pagination"]["total"], 1);

    let json = body_json(get(app, "/api/integrations/categories").await).await;
    assert_eq!(json["data"], json!(["automation", "chat"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bulk_limit_allows_500(pool: PgPool) {
    let app = build_test_app(pool);

    let json = body_json(get(app, "/api/integrations?limit=9999").await).await;
    assert_eq!(json["pagination"]["limit"], 500);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_inactive_integration_is_404_publicly(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let created = create(
        app.clone(),
        &token,
        json!({ "name": "Hidden", "category": "chat", "is_active": false }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/integrations/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Integration not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_and_delete(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let created = create(
        app.clone(),
        &token,
        json!({ "name": "Slack", "category": "chat" }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        app.clone(),
        &format!("/api/integrations/admin/{id}"),
        json!({ "display_order": "7", "name": "" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["display_order"], 7);
    // Blank values leave the stored field untouched.
    assert_eq!(json["data"]["name"], "Slack");

    let response = delete_auth(app.clone(), &format!("/api/integrations/admin/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &format!("/api/integrations/admin/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Integration not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_logo_replacement_removes_old_file(pool: PgPool) {
    let uploads = tempfile::tempdir().unwrap();
    let token = admin_token(&pool).await;
    let app = build_test_app_with(pool, config_with_uploads(uploads.path().to_path_buf()));

    let response = multipart_auth(
        app.clone(),
        Method::POST,
        "/api/integrations/admin",
        &[("name", "Slack"), ("category", "chat")],
        Some(("logo.png", b"\x89PNG logo".as_slice())),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();
    let old_url = json["data"]["logo_url"].as_str().unwrap().to_string();
    let old_path = uploads
        .path()
        .join("integrations")
        .join(old_url.rsplit('/').next().unwrap());
    assert!(old_path.exists());

    let response = multipart_auth(
        app,
        Method::PUT,
        &format!("/api/integrations/admin/{id}"),
        &[],
        Some(("logo.webp", b"RIFF".as_slice())),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let new_url = json["data"]["logo_url"].as_str().unwrap();
    assert_ne!(new_url, old_url);
    assert!(new_url.ends_with(".webp"));
    assert!(!old_path.exists());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_svg_logo_is_rejected(pool: PgPool) {
    let uploads = tempfile::tempdir().unwrap();
    let token = admin_token(&pool).await;
    let app = build_test_app_with(pool, config_with_uploads(uploads.path().to_path_buf()));

    let response = multipart_auth(
        app,
        Method::POST,
        "/api/integrations/admin",
        &[("name", "Slack"), ("category", "chat")],
        Some(("logo.svg", b"<svg onload=\"alert(1)\"/>".as_slice())),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert!(!uploads.path().join("integrations").exists());
}
