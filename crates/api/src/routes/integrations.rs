//! Route definitions for the `/integrations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::integrations;
use crate::state::AppState;

/// Routes mounted at `/integrations`.
///
/// ```text
/// GET    /             -> list_integrations
/// GET    /categories   -> list_categories
/// GET    /{id}         -> get_integration
/// GET    /admin        -> admin_list_integrations
/// POST   /admin        -> create_integration
/// GET    /admin/{id}   -> admin_get_integration
/// PUT    /admin/{id}   -> update_integration
/// DELETE /admin/{id}   -> delete_integration
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(integrations::list_integrations))
        .route("/categories", get(integrations::list_categories))
        .route(
            "/admin",
            get(integrations::admin_list_integrations).post(integrations::create_integration),
        )
        .route(
            "/admin/{id}",
            get(integrations::admin_get_integration)
                .put(integrations::update_integration)
                .delete(integrations::delete_integration),
        )
        .route("/{id}", get(integrations::get_integration))
}
