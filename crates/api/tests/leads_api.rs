//! HTTP-level integration tests for the `/api/leads` endpoints.

mod common;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use common::{
    admin_token, body_json, build_test_app, build_test_app_with, delete_auth, get_auth, send,
    test_config,
};
use serde_json::json;
use sitecms_api::config::{RateLimitConfig, ServerConfig};
use sqlx::PgPool;

async fn submit_from(app: axum::Router, ip: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/leads")
        .header(CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn lead(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "email": "prospect@example.com",
        "company": "  ",
        "message": "Interested in a demo",
        "source": "pricing-page",
    })
}

async fn update(app: axum::Router, id: i64, body: serde_json::Value, token: &str) -> Response {
    common::put_json_auth(app, &format!("/api/leads/admin/{id}"), body, token).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_returns_only_id(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let response = submit_from(app.clone(), "203.0.113.1", lead(" Ada ")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();
    assert!(json["data"].get("email").is_none());

    let json = body_json(get_auth(app, &format!("/api/leads/admin/{id}"), &token).await).await;
    assert_eq!(json["data"]["name"], "Ada");
    assert_eq!(json["data"]["status"], "new");
    assert!(json["data"]["company"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_rejects_invalid_email(pool: PgPool) {
    let app = build_test_app(pool);

    let response = submit_from(
        app,
        "203.0.113.1",
        json!({ "name": "Ada", "email": "not-an-email" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_is_rate_limited_per_client(pool: PgPool) {
    let config = ServerConfig {
        rate_limits: RateLimitConfig {
            leads_max: 2,
            ..RateLimitConfig::default()
        },
        ..test_config()
    };
    let app = build_test_app_with(pool, config);

    for _ in 0..2 {
        let response = submit_from(app.clone(), "198.51.100.7", lead("Ada")).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = submit_from(app.clone(), "198.51.100.7", lead("Ada")).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_json(response).await;
    assert_eq!(json["code"], "RATE_LIMITED");

    // Only the first forwarded address counts, and other clients are unaffected.
    let response = submit_from(app, "198.51.100.8, 198.51.100.7", lead("Bob")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_requires_token(pool: PgPool) {
    let app = build_test_app(pool);

    let response = common::get(app, "/api/leads/admin").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_list_filters_by_status(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let first = body_json(submit_from(app.clone(), "203.0.113.1", lead("First")).await).await;
    submit_from(app.clone(), "203.0.113.2", lead("Second")).await;
    let id = first["data"]["id"].as_i64().unwrap();

    let response = update(app.clone(), id, json!({ "status": "Contacted", "notes": "Called" }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "contacted");
    assert_eq!(json["data"]["notes"], "Called");

    let json = body_json(get_auth(app.clone(), "/api/leads/admin", &token).await).await;
    assert_eq!(json["pagination"]["total"], 2);

    let json = body_json(get_auth(app.clone(), "/api/leads/admin?status=contacted", &token).await).await;
    assert_eq!(json["pagination"]["total"], 1);
    assert_eq!(json["data"][0]["name"], "First");

    let response = get_auth(app, "/api/leads/admin?status=bogus", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_unknown_status(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let created = body_json(submit_from(app.clone(), "203.0.113.1", lead("Ada")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = update(app, id, json!({ "status": "won" }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_lead(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let created = body_json(submit_from(app.clone(), "203.0.113.1", lead("Ada")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/leads/admin/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &format!("/api/leads/admin/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Lead not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_without_name_is_a_validation_error(pool: PgPool) {
    let app = build_test_app(pool);

    let response = submit_from(app, "203.0.113.1", json!({ "email": "a@example.com" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_malformed_json_is_bad_request(pool: PgPool) {
    let app = build_test_app(pool);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/leads")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_mistyped_status_is_a_validation_error(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = build_test_app(pool);

    let created = body_json(submit_from(app.clone(), "203.0.113.1", lead("Ada")).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = update(app, id, json!({ "status": 3 }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}
