//! Route definitions for the `/leads` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Routes mounted at `/leads`.
///
/// ```text
/// POST   /             -> submit_lead (public, rate limited)
/// GET    /admin        -> admin_list_leads
/// GET    /admin/{id}   -> admin_get_lead
/// PUT    /admin/{id}   -> admin_update_lead
/// DELETE /admin/{id}   -> admin_delete_lead
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(leads::submit_lead))
        .route("/admin", get(leads::admin_list_leads))
        .route(
            "/admin/{id}",
            get(leads::admin_get_lead)
                .put(leads::admin_update_lead)
                .delete(leads::admin_delete_lead),
        )
}
