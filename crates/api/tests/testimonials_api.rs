//! HTTP-level integration tests for the `/api/testimonials` endpoints.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, build_test_app, delete_auth, get, get_auth, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_defaults_and_localized_read(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/testimonials/admin",
        json!({
            "author_name": "Ada",
            "author_role": "CTO",
            "author_role_ar": "المدير التقني",
            "content": "Great product",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["rating"], 5);
    assert_eq!(json["data"]["is_active"], true);
    let id = json["data"]["id"].as_i64().unwrap();

    let json = body_json(get(app, &format!("/api/testimonials/{id}?lang=ar-SA")).await).await;
    assert_eq!(json["data"]["author_role"], "المدير التقني");
    assert_eq!(json["data"]["content"], "Great product");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rating_out_of_range_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    for rating in [json!(0), json!(6), json!("abc")] {
        let response = post_json_auth(
            app.clone(),
            "/api/testimonials/admin",
            json!({ "author_name": "Ada", "content": "Hi", "rating": rating }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "rating {rating}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_requires_author_and_content(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/testimonials/admin",
        json!({ "content": "Anonymous praise" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "author_name is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_inactive_hidden_publicly_but_listed_for_admin(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    post_json_auth(
        app.clone(),
        "/api/testimonials/admin",
        json!({ "author_name": "Hidden", "content": "x", "is_active": false }),
        &token,
    )
    .await;

    let json = body_json(get(app.clone(), "/api/testimonials").await).await;
    assert_eq!(json["pagination"]["total"], 0);

    let json = body_json(get_auth(app, "/api/testimonials/admin", &token).await).await;
    assert_eq!(json["pagination"]["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_missing_returns_404(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = delete_auth(app, "/api/testimonials/admin/424242", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Testimonial not found");
}
