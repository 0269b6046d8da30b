pub mod auth;
pub mod blog;
pub mod health;
pub mod integrations;
pub mod leads;
pub mod site_content;
pub mod sitemap;
pub mod testimonials;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth           login, me, create-admin
/// /blog           published posts + admin CRUD
/// /testimonials   active testimonials + admin CRUD
/// /integrations   active integrations, categories + admin CRUD
/// /videos         active videos + admin CRUD
/// /leads          contact form + admin inbox
/// /content        keyed site copy + admin upsert
/// /sitemap.xml    XML sitemap
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/blog", blog::router())
        .nest("/testimonials", testimonials::router())
        .nest("/integrations", integrations::router())
        .nest("/videos", videos::router())
        .nest("/leads", leads::router())
        .nest("/content", site_content::router())
        .merge(sitemap::router())
}
