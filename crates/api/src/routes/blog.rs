//! Route definitions for the `/blog` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Routes mounted at `/blog`.
///
/// ```text
/// GET    /             -> list_posts
/// GET    /{slug}       -> get_post
/// GET    /admin        -> admin_list_posts
/// POST   /admin        -> create_post
/// GET    /admin/{id}   -> admin_get_post
/// PUT    /admin/{id}   -> update_post
/// DELETE /admin/{id}   -> delete_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_posts))
        .route(
            "/admin",
            get(blog::admin_list_posts).post(blog::create_post),
        )
        .route(
            "/admin/{id}",
            get(blog::admin_get_post)
                .put(blog::update_post)
                .delete(blog::delete_post),
        )
        .route("/{slug}", get(blog::get_post))
}
