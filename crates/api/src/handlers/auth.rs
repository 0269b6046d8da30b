//! Handlers for the `/auth` resource (login, current user, one-time setup).

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use sitecms_core::error::CoreError;
use sitecms_core::rate_limit::BUCKET_LOGIN;
use sitecms_core::roles::ROLE_ADMIN;
use sitecms_core::setup::{setup_token_matches, SETUP_TOKEN_HEADER};
use sitecms_db::models::user::{CreateUser, UserResponse};
use sitecms_db::repositories::UserRepo;
use validator::Validate;

use super::enforce_rate_limit;
use crate::auth::jwt::generate_access_token;
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult, DbContext};
use crate::form::AppJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::client_ip::ClientIp;
use crate::response::DataResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Request body for `POST /auth/create-admin`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub password: String,
    #[validate(length(max = 200))]
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password. Rate limited per client address.
pub async fn login(
    State(state): State<AppState>,
    client: ClientIp,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    enforce_rate_limit(&state, BUCKET_LOGIN, &client)?;

    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await
        .db_context("Failed to log in")?
        .ok_or_else(|| CoreError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(user_id = user.id, client = %client.0, "Failed login attempt");
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
    }

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        token,
        expires_in: state.config.jwt.expiry_secs(),
        user: user.into(),
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await
        .db_context("Failed to fetch user")?
        .ok_or_else(|| CoreError::Unauthorized("User no longer exists".into()))?;
    Ok(Json(DataResponse { data: user.into() }))
}

/// POST /api/auth/create-admin
///
/// One-time bootstrap of the first admin account. Checks run in a fixed
/// order: setup enabled, no users yet, setup token, then the body. The body
/// is parsed last so a malformed payload never reveals whether setup is
/// still open.
pub async fn create_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let Some(secret) = state.config.setup_secret.as_deref() else {
        return Err(CoreError::Forbidden("Admin setup is disabled".into()).into());
    };

    if UserRepo::any_exists(&state.pool)
        .await
        .db_context("Failed to create admin")?
    {
        return Err(CoreError::Conflict("An admin account already exists".into()).into());
    }

    let presented = headers
        .get(SETUP_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !setup_token_matches(presented, secret) {
        tracing::warn!("Rejected admin setup attempt with invalid token");
        return Err(CoreError::Forbidden("Invalid setup token".into()).into());
    }

    let input: CreateAdminRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))?;
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(CoreError::Validation)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email.trim().to_string(),
            name: input.name.filter(|n| !n.trim().is_empty()),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await
    .db_context("Failed to create admin")?;

    tracing::info!(user_id = user.id, "Initial admin account created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: user.into() })))
}
