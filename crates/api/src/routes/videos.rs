//! Route definitions for the `/videos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET    /             -> list_videos
/// GET    /{id}         -> get_video
/// GET    /admin        -> admin_list_videos
/// POST   /admin        -> create_video
/// GET    /admin/{id}   -> admin_get_video
/// PUT    /admin/{id}   -> update_video
/// DELETE /admin/{id}   -> delete_video
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::list_videos))
        .route("/admin", get(videos::admin_list_videos).post(videos::create_video))
        .route(
            "/admin/{id}",
            get(videos::admin_get_video)
                .put(videos::update_video)
                .delete(videos::delete_video),
        )
        .route("/{id}", get(videos::get_video))
}
