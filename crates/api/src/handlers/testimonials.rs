//! Handlers for the `/testimonials` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use sitecms_core::error::CoreError;
use sitecms_core::pagination::{Paginated, MAX_LIMIT};
use sitecms_core::types::DbId;
use sitecms_core::uploads::TESTIMONIAL_UPLOADS;
use sitecms_core::validation::{require_text, validate_rating};
use sitecms_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use sitecms_db::repositories::TestimonialRepo;

use super::{localize_one, localize_page};
use crate::error::{AppResult, DbContext};
use crate::form::ContentForm;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{LangParams, ListParams};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::{discard_on_error, remove_replaced, remove_upload, save_upload};

const ENTITY: &str = "Testimonial";
const FETCH_MANY: &str = "Failed to fetch testimonials";
const FETCH_ONE: &str = "Failed to fetch testimonial";
const CREATE: &str = "Failed to create testimonial";
const UPDATE: &str = "Failed to update testimonial";
const DELETE: &str = "Failed to delete testimonial";

fn read_rating(form: &ContentForm) -> AppResult<Option<i16>> {
    let rating = form.number::<i16>("rating")?;
    if let Some(r) = rating {
        validate_rating(r)?;
    }
    Ok(rating)
}

/// GET /api/testimonials?page=&limit=&lang=
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Paginated<Value>>> {
    let req = params.page_request(MAX_LIMIT);

    let total = TestimonialRepo::count_active(&state.pool)
        .await
        .db_context(FETCH_MANY)?;
    let rows = TestimonialRepo::list_active(&state.pool, req.limit, req.offset())
        .await
        .db_context(FETCH_MANY)?;

    let page = localize_page(Paginated::new(rows, req, total), params.language())?;
    Ok(Json(page))
}

/// GET /api/testimonials/{id}?lang=
pub async fn get_testimonial(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let row = TestimonialRepo::find_active_by_id(&state.pool, id)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    Ok(Json(DataResponse {
        data: localize_one(&row, params.language())?,
    }))
}

/// GET /api/testimonials/admin?page=&limit=
pub async fn admin_list_testimonials(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Paginated<Testimonial>>> {
    let req = params.page_request(MAX_LIMIT);
    let total = TestimonialRepo::count_all(&state.pool)
        .await
        .db_context(FETCH_MANY)?;
    let rows = TestimonialRepo::list_all(&state.pool, req.limit, req.offset())
        .await
        .db_context(FETCH_MANY)?;
    Ok(Json(Paginated::new(rows, req, total)))
}

/// GET /api/testimonials/admin/{id}
pub async fn admin_get_testimonial(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Testimonial>>> {
    let row = TestimonialRepo::find_by_id(&state.pool, id)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/testimonials/admin
///
/// Requires `author_name` and `content`; `rating` defaults to 5.
pub async fn create_testimonial(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    form: ContentForm,
) -> AppResult<(StatusCode, Json<DataResponse<Testimonial>>)> {
    let author_name = require_text("author_name", form.text("author_name").as_deref())?;
    let content = require_text("content", form.text("content").as_deref())?;
    let rating = read_rating(&form)?;
    let is_active = form.flag("is_active")?;

    let uploaded = match &form.file {
        Some(file) => {
            Some(save_upload(&state.config.upload_dir, TESTIMONIAL_UPLOADS, file).await?)
        }
        None => None,
    };

    let input = CreateTestimonial {
        author_name,
        author_role: form.text("author_role"),
        author_role_ar: form.text("author_role_ar"),
        author_role_fr: form.text("author_role_fr"),
        author_role_es: form.text("author_role_es"),
        company: form.text("company"),
        content,
        content_ar: form.text("content_ar"),
        content_fr: form.text("content_fr"),
        content_es: form.text("content_es"),
        avatar_url: uploaded.clone().or_else(|| form.text("avatar_url")),
        rating,
        is_active,
    };

    let row = discard_on_error(
        &state.config.upload_dir,
        TESTIMONIAL_UPLOADS,
        uploaded.as_deref(),
        TestimonialRepo::create(&state.pool, &input)
            .await
            .db_context(CREATE),
    )
    .await?;

    tracing::info!(testimonial_id = row.id, user_id = admin.user_id, "Testimonial created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/testimonials/admin/{id}
pub async fn update_testimonial(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    form: ContentForm,
) -> AppResult<Json<DataResponse<Testimonial>>> {
    let existing = TestimonialRepo::find_by_id(&state.pool, id)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    let rating = read_rating(&form)?;
    let is_active = form.flag("is_active")?;

    let uploaded = match &form.file {
        Some(file) => {
            Some(save_upload(&state.config.upload_dir, TESTIMONIAL_UPLOADS, file).await?)
        }
        None => None,
    };

    let input = UpdateTestimonial {
        author_name: form.text("author_name"),
        author_role: form.text("author_role"),
        author_role_ar: form.text("author_role_ar"),
        author_role_fr: form.text("author_role_fr"),
        author_role_es: form.text("author_role_es"),
        company: form.text("company"),
        content: form.text("content"),
        content_ar: form.text("content_ar"),
        content_fr: form.text("content_fr"),
        content_es: form.text("content_es"),
        avatar_url: uploaded.clone().or_else(|| form.text("avatar_url")),
        rating,
        is_active,
    };

    let result = TestimonialRepo::update(&state.pool, id, &input)
        .await
        .db_context(UPDATE)
        .and_then(|row| row.ok_or_else(|| CoreError::not_found(ENTITY, id).into()));
    let row = discard_on_error(
        &state.config.upload_dir,
        TESTIMONIAL_UPLOADS,
        uploaded.as_deref(),
        result,
    )
    .await?;

    remove_replaced(
        &state.config.upload_dir,
        TESTIMONIAL_UPLOADS,
        existing.avatar_url.as_deref(),
        row.avatar_url.as_deref(),
    )
    .await;

    tracing::info!(testimonial_id = id, user_id = admin.user_id, "Testimonial updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/testimonials/admin/{id}
pub async fn delete_testimonial(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let row = TestimonialRepo::delete(&state.pool, id)
        .await
        .db_context(DELETE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    remove_upload(
        &state.config.upload_dir,
        TESTIMONIAL_UPLOADS,
        row.avatar_url.as_deref(),
    )
    .await;

    tracing::info!(testimonial_id = id, user_id = admin.user_id, "Testimonial deleted");

    Ok(StatusCode::NO_CONTENT)
}
