//! HTTP-level integration tests for the `/api/auth` endpoints.

mod common;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, build_test_app, build_test_app_with, create_user, get, get_auth, post_json, send,
    test_config, token_for, TEST_PASSWORD, TEST_SETUP_SECRET,
};
use serde_json::json;
use sitecms_api::config::{RateLimitConfig, ServerConfig};
use sqlx::PgPool;

async fn create_admin(app: axum::Router, token: Option<&str>, body: serde_json::Value) -> axum::response::Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/create-admin")
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header("x-setup-token", token);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

fn admin_body() -> serde_json::Value {
    json!({ "email": "owner@example.com", "password": TEST_PASSWORD, "name": "Owner" })
}

// ---------------------------------------------------------------------------
// create-admin
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_admin_disabled_without_secret(pool: PgPool) {
    let config = ServerConfig {
        setup_secret: None,
        ..test_config()
    };
    let app = build_test_app_with(pool, config);

    let response = create_admin(app, Some(TEST_SETUP_SECRET), admin_body()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Admin setup is disabled");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_admin_rejects_bad_or_missing_token(pool: PgPool) {
    let app = build_test_app(pool);

    let response = create_admin(app.clone(), Some("wrong"), admin_body()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "Invalid setup token");

    let response = create_admin(app, None, admin_body()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_admin_rejects_short_password(pool: PgPool) {
    let app = build_test_app(pool);

    let response = create_admin(
        app,
        Some(TEST_SETUP_SECRET),
        json!({ "email": "owner@example.com", "password": "short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_admin_once(pool: PgPool) {
    let app = build_test_app(pool);

    let response = create_admin(app.clone(), Some(TEST_SETUP_SECRET), admin_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "owner@example.com");
    assert_eq!(json["data"]["role"], "admin");
    assert!(json["data"].get("password_hash").is_none());

    // Second attempt conflicts no matter which token is presented.
    let response = create_admin(app.clone(), Some(TEST_SETUP_SECRET), admin_body()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let response = create_admin(app, Some("wrong"), admin_body()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// login / me
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_returns_token_and_user(pool: PgPool) {
    create_user(&pool, "admin@example.com", "admin").await;
    let app = build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/auth/login",
        json!({ "email": "admin@example.com", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["expiresIn"], 24 * 3600);
    assert_eq!(json["user"]["email"], "admin@example.com");
    let token = json["token"].as_str().unwrap().to_string();

    let response = get_auth(app, "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["role"], "admin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password_or_unknown_email(pool: PgPool) {
    create_user(&pool, "admin@example.com", "admin").await;
    let app = build_test_app(pool);

    for body in [
        json!({ "email": "admin@example.com", "password": "nope-nope-nope" }),
        json!({ "email": "ghost@example.com", "password": TEST_PASSWORD }),
    ] {
        let response = post_json(app.clone(), "/api/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Invalid email or password");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_requires_token(pool: PgPool) {
    let user = create_user(&pool, "editor@example.com", "editor").await;
    let app = build_test_app(pool);

    let response = get(app.clone(), "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/auth/me", &token_for(&user)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_is_rate_limited(pool: PgPool) {
    let config = ServerConfig {
        rate_limits: RateLimitConfig {
            login_max: 2,
            ..RateLimitConfig::default()
        },
        ..test_config()
    };
    let app = build_test_app_with(pool, config);
    let body = json!({ "email": "ghost@example.com", "password": "whatever-password" });

    for _ in 0..2 {
        let response = post_json(app.clone(), "/api/auth/login", body.clone()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body_json(response).await["code"], "RATE_LIMITED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_without_password_is_a_validation_error(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/auth/login", json!({ "email": "a@example.com" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("password"));
}
