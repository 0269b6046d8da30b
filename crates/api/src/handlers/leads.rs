//! Handlers for the `/leads` resource (contact form submissions).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitecms_core::error::CoreError;
use sitecms_core::pagination::{Paginated, MAX_LIMIT};
use sitecms_core::rate_limit::BUCKET_LEADS;
use sitecms_core::types::DbId;
use sitecms_core::validation::validate_lead_status;
use sitecms_db::models::lead::{CreateLead, Lead, UpdateLead};
use sitecms_db::repositories::LeadRepo;
use validator::Validate;

use super::enforce_rate_limit;
use crate::error::{AppResult, DbContext};
use crate::form::AppJson;
use crate::middleware::client_ip::ClientIp;
use crate::middleware::rbac::RequireAdmin;
use crate::query::LeadListParams;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Lead";
const SUBMIT: &str = "Failed to submit lead";
const FETCH_MANY: &str = "Failed to fetch leads";
const FETCH_ONE: &str = "Failed to fetch lead";
const UPDATE: &str = "Failed to update lead";
const DELETE: &str = "Failed to delete lead";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /leads`.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitLeadRequest {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 5000, message = "message must be at most 5000 characters"))]
    pub message: Option<String>,
    #[validate(length(max = 100))]
    pub source: Option<String>,
}

impl SubmitLeadRequest {
    /// Trim every field; blank optionals become `None`.
    fn normalized(self) -> Self {
        fn opt(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: opt(self.company),
            phone: opt(self.phone),
            message: opt(self.message),
            source: opt(self.source),
        }
    }
}

/// Request body for `PUT /leads/admin/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateLeadRequest {
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmittedLead {
    pub id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/leads
///
/// Public contact form endpoint, rate limited per client address.
pub async fn submit_lead(
    State(state): State<AppState>,
    client: ClientIp,
    AppJson(input): AppJson<SubmitLeadRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<SubmittedLead>>)> {
    enforce_rate_limit(&state, BUCKET_LEADS, &client)?;

    let input = input.normalized();
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let lead = LeadRepo::create(
        &state.pool,
        &CreateLead {
            name: input.name,
            email: input.email,
            company: input.company,
            phone: input.phone,
            message: input.message,
            source: input.source,
        },
    )
    .await
    .db_context(SUBMIT)?;

    tracing::info!(lead_id = lead.id, source = ?lead.source, "Lead submitted");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmittedLead { id: lead.id },
        }),
    ))
}

/// GET /api/leads/admin?page=&limit=&status=
pub async fn admin_list_leads(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<LeadListParams>,
) -> AppResult<Json<Paginated<Lead>>> {
    let req = params.page_request(MAX_LIMIT);
    let status = params.status();
    if let Some(status) = status {
        validate_lead_status(status)?;
    }

    let total = LeadRepo::count(&state.pool, status)
        .await
        .db_context(FETCH_MANY)?;
    let rows = LeadRepo::list(&state.pool, status, req.limit, req.offset())
        .await
        .db_context(FETCH_MANY)?;
    Ok(Json(Paginated::new(rows, req, total)))
}

/// GET /api/leads/admin/{id}
pub async fn admin_get_lead(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Lead>>> {
    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await
        .db_context(FETCH_ONE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: lead }))
}

/// PUT /api/leads/admin/{id}
pub async fn admin_update_lead(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateLeadRequest>,
) -> AppResult<Json<DataResponse<Lead>>> {
    let status = input
        .status
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty());
    if let Some(status) = &status {
        validate_lead_status(status)?;
    }

    let update = UpdateLead {
        status,
        notes: input.notes,
    };
    let lead = LeadRepo::update(&state.pool, id, &update)
        .await
        .db_context(UPDATE)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    tracing::info!(lead_id = id, status = %lead.status, user_id = admin.user_id, "Lead updated");

    Ok(Json(DataResponse { data: lead }))
}

/// DELETE /api/leads/admin/{id}
pub async fn admin_delete_lead(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LeadRepo::delete(&state.pool, id)
        .await
        .db_context(DELETE)?;
    if !deleted {
        return Err(CoreError::not_found(ENTITY, id).into());
    }

    tracing::info!(lead_id = id, user_id = admin.user_id, "Lead deleted");

    Ok(StatusCode::NO_CONTENT)
}
