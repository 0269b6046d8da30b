//! Handlers for the `/videos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use sitecms_core::error::CoreError;
use sitecms_core::pagination::{Paginated, MAX_LIMIT};
use sitecms_core::types::DbId;
use sitecms_core::uploads::VIDEO_UPLOADS;
use sitecms_core::validation::require_text;
use sitecms_db::models::video::{CreateVideo, UpdateVideo, Video};
use sitecms_db::repositories::VideoRepo;

use super::{localize_one, localize_page};
use crate::error::{AppResult, DbContext};
use crate::form::ContentForm;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{LangParams, ListParams};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::{discard_on_error, remove_replaced, remove_upload, save_upload};

const ENTITY: &str = "Video";
const FETCH_MANY: &str = "Failed to fetch videos";
const FETCH_ONE: &str = "Failed to fetch video";
const CREATE: &str = "Failed to create video";
const UPDATE: &str = "Failed to update video";
const DELETE: &str = "Failed to delete video";

/// GET /api/videos?page=&limit=&lang=&category=
pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Paginated<Value>>> {
    let req = params.page_request(MAX_LIMIT);
    let category = params.category();

    let total = VideoRepo::count_active(&state.pool, category)
        .await
        .db_context(FETCH_MANY)?;
    let rows = VideoRepo::list_active(&state.pool, category, req.limit, req.offset())
        .await
        .db_context(FETCH_MANY)?;

    let page = localize_page(Paginated::new(rows, req, total), params.language())?;
    Ok(Json(page))
}

/// GET /api/videos/{id}?lang=
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let row = VideoRepo::find_active_by_id(&state.pool, id)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    Ok(Json(DataResponse {
        data: localize_one(&row, params.language())?,
    }))
}

/// GET /api/videos/admin?page=&limit=
pub async fn admin_list_videos(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Paginated<Video>>> {
    let req = params.page_request(MAX_LIMIT);
    let total = VideoRepo::count_all(&state.pool)
        .await
        .db_context(FETCH_MANY)?;
    let rows = VideoRepo::list_all(&state.pool, req.limit, req.offset())
        .await
        .db_context(FETCH_MANY)?;
    Ok(Json(Paginated::new(rows, req, total)))
}

/// GET /api/videos/admin/{id}
pub async fn admin_get_video(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Video>>> {
    let row = VideoRepo::find_by_id(&state.pool, id)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/videos/admin
///
/// Requires `title` and `video_url`. An attached `file` becomes the
/// thumbnail; the video itself is always an external URL.
pub async fn create_video(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    form: ContentForm,
) -> AppResult<(StatusCode, Json<DataResponse<Video>>)> {
    let title = require_text("title", form.text("title").as_deref())?;
    let video_url = require_text("video_url", form.text("video_url").as_deref())?;
    let display_order = form.number::<i32>("display_order")?;
    let is_active = form.flag("is_active")?;

    let uploaded = match &form.file {
        Some(file) => Some(save_upload(&state.config.upload_dir, VIDEO_UPLOADS, file).await?),
        None => None,
    };

    let input = CreateVideo {
        title,
        title_ar: form.text("title_ar"),
        title_fr: form.text("title_fr"),
        title_es: form.text("title_es"),
        description: form.text("description"),
        description_ar: form.text("description_ar"),
        description_fr: form.text("description_fr"),
        description_es: form.text("description_es"),
        video_url,
        thumbnail_url: uploaded.clone().or_else(|| form.text("thumbnail_url")),
        category: form.text("category"),
        display_order,
        is_active,
    };

    let row = discard_on_error(
        &state.config.upload_dir,
        VIDEO_UPLOADS,
        uploaded.as_deref(),
        VideoRepo::create(&state.pool, &input).await.db_context(CREATE),
    )
    .await?;

    tracing::info!(video_id = row.id, user_id = admin.user_id, "Video created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/videos/admin/{id}
pub async fn update_video(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    form: ContentForm,
) -> AppResult<Json<DataResponse<Video>>> {
    let existing = VideoRepo::find_by_id(&state.pool, id)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    let display_order = form.number::<i32>("display_order")?;
    let is_active = form.flag("is_active")?;

    let uploaded = match &form.file {
        Some(file) => Some(save_upload(&state.config.upload_dir, VIDEO_UPLOADS, file).await?),
        None => None,
    };

    let input = UpdateVideo {
        title: form.text("title"),
        title_ar: form.text("title_ar"),
        title_fr: form.text("title_fr"),
        title_es: form.text("title_es"),
        description: form.text("description"),
        description_ar: form.text("description_ar"),
        description_fr: form.text("description_fr"),
        description_es: form.text("description_es"),
        video_url: form.text("video_url"),
        thumbnail_url: uploaded.clone().or_else(|| form.text("thumbnail_url")),
        category: form.text("category"),
        display_order,
        is_active,
    };

    let result = VideoRepo::update(&state.pool, id, &input)
        .await
        .db_context(UPDATE)
        .and_then(|row| row.ok_or_else(|| CoreError::not_found(ENTITY, id).into()));
    let row = discard_on_error(
        &state.config.upload_dir,
        VIDEO_UPLOADS,
        uploaded.as_deref(),
        result,
    )
    .await?;

    remove_replaced(
        &state.config.upload_dir,
        VIDEO_UPLOADS,
        existing.thumbnail_url.as_deref(),
        row.thumbnail_url.as_deref(),
    )
    .await;

    tracing::info!(video_id = id, user_id = admin.user_id, "Video updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/videos/admin/{id}
pub async fn delete_video(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let row = VideoRepo::delete(&state.pool, id)
        .await
        .db_context(DELETE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    remove_upload(
        &state.config.upload_dir,
        VIDEO_UPLOADS,
        row.thumbnail_url.as_deref(),
    )
    .await;

    tracing::info!(video_id = id, user_id = admin.user_id, "Video deleted");

    Ok(StatusCode::NO_CONTENT)
}
