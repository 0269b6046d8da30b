//! Route definitions for the `/testimonials` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET    /             -> list_testimonials
/// GET    /{id}         -> get_testimonial
/// GET    /admin        -> admin_list_testimonials
/// POST   /admin        -> create_testimonial
/// GET    /admin/{id}   -> admin_get_testimonial
/// PUT    /admin/{id}   -> update_testimonial
/// DELETE /admin/{id}   -> delete_testimonial
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonials::list_testimonials))
        .route(
            "/admin",
            get(testimonials::admin_list_testimonials).post(testimonials::create_testimonial),
        )
        .route(
            "/admin/{id}",
            get(testimonials::admin_get_testimonial)
                .put(testimonials::update_testimonial)
                .delete(testimonials::delete_testimonial),
        )
        .route("/{id}", get(testimonials::get_testimonial))
}
