//! Route definitions for the `/content` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::site_content;
use crate::state::AppState;

/// Routes mounted at `/content`.
///
/// ```text
/// GET    /              -> list_content
/// GET    /{key}         -> get_content
/// GET    /admin         -> admin_list_content
/// PUT    /admin/{key}   -> admin_upsert_content
/// DELETE /admin/{key}   -> admin_delete_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site_content::list_content))
        .route("/admin", get(site_content::admin_list_content))
        .route(
            "/admin/{key}",
            put(site_content::admin_upsert_content).delete(site_content::admin_delete_content),
        )
        .route("/{key}", get(site_content::get_content))
}
