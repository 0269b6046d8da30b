use axum::routing::get;
use axum::Router;

use crate::handlers::sitemap;
use crate::state::AppState;

/// `GET /sitemap.xml`, merged into the `/api` tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/sitemap.xml", get(sitemap::sitemap))
}
