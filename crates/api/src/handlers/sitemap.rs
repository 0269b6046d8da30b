//! Handler for `GET /sitemap.xml`.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use sitecms_core::sitemap::{build_entries, render, PostLink, STATIC_ROUTES};
use sitecms_db::repositories::BlogPostRepo;

use crate::error::{AppResult, DbContext};
use crate::state::AppState;

/// GET /api/sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts: Vec<PostLink> = BlogPostRepo::list_published_slugs(&state.pool)
        .await
        .db_context("Failed to generate sitemap")?
        .into_iter()
        .map(|p| PostLink {
            slug: p.slug,
            last_modified: p.updated_at.date_naive(),
        })
        .collect();

    let entries = build_entries(&state.config.site_url, STATIC_ROUTES, &posts);
    tracing::debug!(urls = entries.len(), "Rendered sitemap");

    Ok(([(CONTENT_TYPE, "application/xml")], render(&entries)))
}
