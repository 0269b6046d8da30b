//! Handlers for the `/content` resource: keyed copy blocks for the site.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use sitecms_core::error::CoreError;
use sitecms_db::models::site_content::{SiteContent, UpsertSiteContent};
use sitecms_db::repositories::SiteContentRepo;

use super::localize_one;
use crate::error::{AppResult, DbContext};
use crate::form::AppJson;
use crate::middleware::rbac::RequireAdmin;
use crate::query::LangParams;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Content";
const FETCH_MANY: &str = "Failed to fetch site content";
const FETCH_ONE: &str = "Failed to fetch content";
const SAVE: &str = "Failed to save content";
const DELETE: &str = "Failed to delete content";

const MAX_KEY_LEN: usize = 100;

fn validate_key(key: &str) -> AppResult<()> {
    let ok = !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if ok {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Content key must be 1-{MAX_KEY_LEN} characters of letters, digits, '.', '_' or '-'"
        ))
        .into())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// GET /api/content?lang=
///
/// Every block as a flat `{key: text}` map in the requested language.
pub async fn list_content(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<DataResponse<BTreeMap<String, Value>>>> {
    let lang = params.language();
    let rows = SiteContentRepo::list(&state.pool)
        .await
        .db_context(FETCH_MANY)?;

    let data = rows
        .iter()
        .map(|row| {
            let mut localized = localize_one(row, lang)?;
            Ok((row.section_key.clone(), localized["value"].take()))
        })
        .collect::<AppResult<BTreeMap<_, _>>>()?;

    Ok(Json(DataResponse { data }))
}

/// GET /api/content/{key}?lang=
pub async fn get_content(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let row = SiteContentRepo::find_by_key(&state.pool, &key)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, &key))?;

    Ok(Json(DataResponse {
        data: localize_one(&row, params.language())?,
    }))
}

/// GET /api/content/admin
pub async fn admin_list_content(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SiteContent>>>> {
    let rows = SiteContentRepo::list(&state.pool)
        .await
        .db_context(FETCH_MANY)?;
    Ok(Json(DataResponse { data: rows }))
}

/// PUT /api/content/admin/{key}
///
/// Upsert. Creating a new key requires `value`; updating patches only the
/// fields supplied.
pub async fn admin_upsert_content(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
    AppJson(input): AppJson<UpsertSiteContent>,
) -> AppResult<(StatusCode, Json<DataResponse<SiteContent>>)> {
    validate_key(&key)?;

    let input = UpsertSiteContent {
        value: non_blank(input.value),
        value_ar: non_blank(input.value_ar),
        value_fr: non_blank(input.value_fr),
        value_es: non_blank(input.value_es),
    };

    if let Some(row) = SiteContentRepo::update(&state.pool, &key, &input)
        .await
        .db_context(SAVE)?
    {
        tracing::info!(section_key = %key, user_id = admin.user_id, "Site content updated");
        return Ok((StatusCode::OK, Json(DataResponse { data: row })));
    }

    let value = input
        .value
        .as_deref()
        .ok_or_else(|| CoreError::Validation("value is required for new content".into()))?;
    let row = SiteContentRepo::create(&state.pool, &key, value, &input)
        .await
        .db_context(SAVE)?;

    tracing::info!(section_key = %key, user_id = admin.user_id, "Site content created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// DELETE /api/content/admin/{key}
pub async fn admin_delete_content(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = SiteContentRepo::delete(&state.pool, &key)
        .await
        .db_context(DELETE)?;
    if !deleted {
        return Err(CoreError::not_found(ENTITY, &key).into());
    }

    tracing::info!(section_key = %key, user_id = admin.user_id, "Site content deleted");

    Ok(StatusCode::NO_CONTENT)
}
