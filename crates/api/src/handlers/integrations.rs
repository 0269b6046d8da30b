//! Handlers for the `/integrations` resource.
//!
//! Integrations are listed in bulk by the site (up to 500 per page) in
//! admin-curated `display_order`, optionally narrowed to one category.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use sitecms_core::error::CoreError;
use sitecms_core::pagination::{Paginated, MAX_LIMIT_BULK};
use sitecms_core::types::DbId;
use sitecms_core::uploads::INTEGRATION_UPLOADS;
use sitecms_core::validation::require_text;
use sitecms_db::models::integration::{CreateIntegration, Integration, UpdateIntegration};
use sitecms_db::repositories::IntegrationRepo;

use super::{localize_one, localize_page};
use crate::error::{AppResult, DbContext};
use crate::form::ContentForm;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{LangParams, ListParams};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::{discard_on_error, remove_replaced, remove_upload, save_upload};

const ENTITY: &str = "Integration";
const FETCH_MANY: &str = "Failed to fetch integrations";
const FETCH_ONE: &str = "Failed to fetch integration";
const FETCH_CATEGORIES: &str = "Failed to fetch integration categories";
const CREATE: &str = "Failed to create integration";
const UPDATE: &str = "Failed to update integration";
const DELETE: &str = "Failed to delete integration";

/// GET /api/integrations?page=&limit=&lang=&category=
pub async fn list_integrations(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Paginated<Value>>> {
    let req = params.page_request(MAX_LIMIT_BULK);
    let category = params.category();

    let total = IntegrationRepo::count_active(&state.pool, category)
        .await
        .db_context(FETCH_MANY)?;
    let rows = IntegrationRepo::list_active(&state.pool, category, req.limit, req.offset())
        .await
        .db_context(FETCH_MANY)?;

    let page = localize_page(Paginated::new(rows, req, total), params.language())?;
    Ok(Json(page))
}

/// GET /api/integrations/categories
///
/// Distinct categories of active integrations, for the site's filter tabs.
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let categories = IntegrationRepo::list_active_categories(&state.pool)
        .await
        .db_context(FETCH_CATEGORIES)?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/integrations/{id}?lang=
pub async fn get_integration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let row = IntegrationRepo::find_active_by_id(&state.pool, id)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    Ok(Json(DataResponse {
        data: localize_one(&row, params.language())?,
    }))
}

/// GET /api/integrations/admin?page=&limit=
pub async fn admin_list_integrations(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Paginated<Integration>>> {
    let req = params.page_request(MAX_LIMIT_BULK);
    let total = IntegrationRepo::count_all(&state.pool)
        .await
        .db_context(FETCH_MANY)?;
    let rows = IntegrationRepo::list_all(&state.pool, req.limit, req.offset())
        .await
        .db_context(FETCH_MANY)?;
    Ok(Json(Paginated::new(rows, req, total)))
}

/// GET /api/integrations/admin/{id}
pub async fn admin_get_integration(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Integration>>> {
    let row = IntegrationRepo::find_by_id(&state.pool, id)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/integrations/admin
///
/// Requires `name` and `category`. An attached `file` becomes the logo.
pub async fn create_integration(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    form: ContentForm,
) -> AppResult<(StatusCode, Json<DataResponse<Integration>>)> {
    let name = require_text("name", form.text("name").as_deref())?;
    let category = require_text("category", form.text("category").as_deref())?;
    let display_order = form.number::<i32>("display_order")?;
    let is_active = form.flag("is_active")?;

    let uploaded = match &form.file {
        Some(file) => {
            Some(save_upload(&state.config.upload_dir, INTEGRATION_UPLOADS, file).await?)
        }
        None => None,
    };

    let input = CreateIntegration {
        name,
        category,
        description: form.text("description"),
        description_ar: form.text("description_ar"),
        description_fr: form.text("description_fr"),
        description_es: form.text("description_es"),
        logo_url: uploaded.clone().or_else(|| form.text("logo_url")),
        website_url: form.text("website_url"),
        display_order,
        is_active,
    };

    let row = discard_on_error(
        &state.config.upload_dir,
        INTEGRATION_UPLOADS,
        uploaded.as_deref(),
        IntegrationRepo::create(&state.pool, &input)
            .await
            .db_context(CREATE),
    )
    .await?;

    tracing::info!(
        integration_id = row.id,
        category = %row.category,
        user_id = admin.user_id,
        "Integration created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/integrations/admin/{id}
pub async fn update_integration(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    form: ContentForm,
) -> AppResult<Json<DataResponse<Integration>>> {
    let existing = IntegrationRepo::find_by_id(&state.pool, id)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    let display_order = form.number::<i32>("display_order")?;
    let is_active = form.flag("is_active")?;

    let uploaded = match &form.file {
        Some(file) => {
            Some(save_upload(&state.config.upload_dir, INTEGRATION_UPLOADS, file).await?)
        }
        None => None,
    };

    let input = UpdateIntegration {
        name: form.text("name"),
        category: form.text("category"),
        description: form.text("description"),
        description_ar: form.text("description_ar"),
        description_fr: form.text("description_fr"),
        description_es: form.text("description_es"),
        logo_url: uploaded.clone().or_else(|| form.text("logo_url")),
        website_url: form.text("website_url"),
        display_order,
        is_active,
    };

    let result = IntegrationRepo::update(&state.pool, id, &input)
        .await
        .db_context(UPDATE)
        .and_then(|row| row.ok_or_else(|| CoreError::not_found(ENTITY, id).into()));
    let row = discard_on_error(
        &state.config.upload_dir,
        INTEGRATION_UPLOADS,
        uploaded.as_deref(),
        result,
    )
    .await?;

    remove_replaced(
        &state.config.upload_dir,
        INTEGRATION_UPLOADS,
        existing.logo_url.as_deref(),
        row.logo_url.as_deref(),
    )
    .await;

    tracing::info!(integration_id = id, user_id = admin.user_id, "Integration updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/integrations/admin/{id}
pub async fn delete_integration(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let row = IntegrationRepo::delete(&state.pool, id)
        .await
        .db_context(DELETE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    remove_upload(
        &state.config.upload_dir,
        INTEGRATION_UPLOADS,
        row.logo_url.as_deref(),
    )
    .await;

    tracing::info!(integration_id = id, user_id = admin.user_id, "Integration deleted");

    Ok(StatusCode::NO_CONTENT)
}
