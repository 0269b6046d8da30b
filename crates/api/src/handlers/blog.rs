//! Handlers for the `/blog` resource.
//!
//! Public endpoints serve published posts localized per `?lang=` and
//! decorated with a `publishedLabel`. Admin endpoints manage every post,
//! including drafts, and accept JSON or multipart bodies with an optional
//! cover image.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::Value;
use sitecms_core::error::CoreError;
use sitecms_core::localization::{Language, Localized};
use sitecms_core::pagination::{PageRequest, Paginated, MAX_LIMIT};
use sitecms_core::slug::{fallback_slug, slugify, validate_slug};
use sitecms_core::types::DbId;
use sitecms_core::uploads::BLOG_UPLOADS;
use sitecms_core::validation::require_text;
use sitecms_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use sitecms_db::repositories::BlogPostRepo;
use sqlx::PgPool;

use super::serialization_error;
use crate::error::{AppResult, DbContext};
use crate::form::ContentForm;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{LangParams, ListParams};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::{discard_on_error, remove_replaced, remove_upload, save_upload};

const ENTITY: &str = "Blog post";
const FETCH_POSTS: &str = "Failed to fetch blog posts";
const FETCH_POST: &str = "Failed to fetch blog post";
const CREATE_POST: &str = "Failed to create blog post";
const UPDATE_POST: &str = "Failed to update blog post";
const DELETE_POST: &str = "Failed to delete blog post";

/// Give up de-duplicating a generated slug after this many suffixes.
const MAX_SLUG_SUFFIX: u32 = 50;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Localize a post and add its human-readable publication date.
fn public_post(state: &AppState, post: &BlogPost, lang: Language) -> AppResult<Value> {
    let mut value = post.localized(lang).map_err(serialization_error)?;
    let date = post.published_at.unwrap_or(post.created_at).date_naive();
    if let Value::Object(map) = &mut value {
        map.insert(
            "publishedLabel".to_string(),
            Value::String(state.date_cache.format(date, lang)),
        );
    }
    Ok(value)
}

/// Validate an explicit slug and make sure no other post uses it.
async fn claim_slug(
    pool: &PgPool,
    slug: &str,
    except_id: Option<DbId>,
    context: &'static str,
) -> AppResult<()> {
    validate_slug(slug)?;
    if BlogPostRepo::slug_taken(pool, slug, except_id)
        .await
        .db_context(context)?
    {
        return Err(CoreError::Conflict(format!("Slug '{slug}' is already in use")).into());
    }
    Ok(())
}

/// Derive a free slug from the title, appending `-2`, `-3`, ... on collision.
async fn generate_slug(pool: &PgPool, title: &str) -> AppResult<String> {
    let mut base = slugify(title);
    if base.is_empty() {
        base = fallback_slug(Utc::now());
    }

    let mut candidate = base.clone();
    for suffix in 2..=MAX_SLUG_SUFFIX + 1 {
        if !BlogPostRepo::slug_taken(pool, &candidate, None)
            .await
            .db_context(CREATE_POST)?
        {
            return Ok(candidate);
        }
        candidate = format!("{base}-{suffix}");
    }
    Err(CoreError::Conflict(format!("Could not derive a free slug from '{base}'")).into())
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/blog?page=&limit=&lang=
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Paginated<Value>>> {
    let req = params.page_request(MAX_LIMIT);
    let lang = params.language();

    let total = BlogPostRepo::count_published(&state.pool)
        .await
        .db_context(FETCH_POSTS)?;
    let posts = BlogPostRepo::list_published(&state.pool, req.limit, req.offset())
        .await
        .db_context(FETCH_POSTS)?;

    let page = Paginated::new(posts, req, total).map(|p| public_post(&state, &p, lang))?;
    Ok(Json(page))
}

/// GET /api/blog/{slug}?lang=
pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LangParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let post = BlogPostRepo::find_published_by_slug(&state.pool, &slug)
        .await
        .db_context(FETCH_POST)?
        .ok_or_else(|| CoreError::not_found(ENTITY, &slug))?;

    let data = public_post(&state, &post, params.language())?;
    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/blog/admin?page=&limit=
pub async fn admin_list_posts(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Paginated<BlogPost>>> {
    let req: PageRequest = params.page_request(MAX_LIMIT);
    let total = BlogPostRepo::count_all(&state.pool)
        .await
        .db_context(FETCH_POSTS)?;
    let posts = BlogPostRepo::list_all(&state.pool, req.limit, req.offset())
        .await
        .db_context(FETCH_POSTS)?;
    Ok(Json(Paginated::new(posts, req, total)))
}

/// GET /api/blog/admin/{id}
pub async fn admin_get_post(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BlogPost>>> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await
        .db_context(FETCH_POST)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: post }))
}

/// POST /api/blog/admin
///
/// Requires `title` and `content`. The slug is generated from the title
/// unless one is given explicitly.
pub async fn create_post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    form: ContentForm,
) -> AppResult<(StatusCode, Json<DataResponse<BlogPost>>)> {
    let title = require_text("title", form.text("title").as_deref())?;
    let content = require_text("content", form.text("content").as_deref())?;
    let is_published = form.flag("is_published")?.unwrap_or(false);

    let slug = match form.text("slug") {
        Some(slug) => {
            claim_slug(&state.pool, &slug, None, CREATE_POST).await?;
            slug
        }
        None => generate_slug(&state.pool, &title).await?,
    };

    let uploaded = match &form.file {
        Some(file) => Some(save_upload(&state.config.upload_dir, BLOG_UPLOADS, file).await?),
        None => None,
    };

    let input = CreateBlogPost {
        slug,
        title,
        title_ar: form.text("title_ar"),
        title_fr: form.text("title_fr"),
        title_es: form.text("title_es"),
        excerpt: form.text("excerpt"),
        excerpt_ar: form.text("excerpt_ar"),
        excerpt_fr: form.text("excerpt_fr"),
        excerpt_es: form.text("excerpt_es"),
        content,
        content_ar: form.text("content_ar"),
        content_fr: form.text("content_fr"),
        content_es: form.text("content_es"),
        author: form.text("author"),
        cover_image_url: uploaded.clone().or_else(|| form.text("cover_image_url")),
        is_published,
    };

    let post = discard_on_error(
        &state.config.upload_dir,
        BLOG_UPLOADS,
        uploaded.as_deref(),
        BlogPostRepo::create(&state.pool, &input)
            .await
            .db_context(CREATE_POST),
    )
    .await?;

    tracing::info!(
        post_id = post.id,
        slug = %post.slug,
        user_id = admin.user_id,
        "Blog post created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PUT /api/blog/admin/{id}
///
/// Partial update: absent or blank fields keep their stored value. A new
/// cover file replaces (and deletes) the previous local one.
pub async fn update_post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    form: ContentForm,
) -> AppResult<Json<DataResponse<BlogPost>>> {
    let existing = BlogPostRepo::find_by_id(&state.pool, id)
        .await
        .db_context(FETCH_POST)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    let slug = form.text("slug");
    if let Some(slug) = &slug {
        claim_slug(&state.pool, slug, Some(id), UPDATE_POST).await?;
    }
    let is_published = form.flag("is_published")?;

    let uploaded = match &form.file {
        Some(file) => Some(save_upload(&state.config.upload_dir, BLOG_UPLOADS, file).await?),
        None => None,
    };

    let input = UpdateBlogPost {
        slug,
        title: form.text("title"),
        title_ar: form.text("title_ar"),
        title_fr: form.text("title_fr"),
        title_es: form.text("title_es"),
        excerpt: form.text("excerpt"),
        excerpt_ar: form.text("excerpt_ar"),
        excerpt_fr: form.text("excerpt_fr"),
        excerpt_es: form.text("excerpt_es"),
        content: form.text("content"),
        content_ar: form.text("content_ar"),
        content_fr: form.text("content_fr"),
        content_es: form.text("content_es"),
        author: form.text("author"),
        cover_image_url: uploaded.clone().or_else(|| form.text("cover_image_url")),
        is_published,
    };

    let result = BlogPostRepo::update(&state.pool, id, &input)
        .await
        .db_context(UPDATE_POST)
        .and_then(|row| row.ok_or_else(|| CoreError::not_found(ENTITY, id).into()));
    let post = discard_on_error(
        &state.config.upload_dir,
        BLOG_UPLOADS,
        uploaded.as_deref(),
        result,
    )
    .await?;

    remove_replaced(
        &state.config.upload_dir,
        BLOG_UPLOADS,
        existing.cover_image_url.as_deref(),
        post.cover_image_url.as_deref(),
    )
    .await;

    tracing::info!(post_id = id, user_id = admin.user_id, "Blog post updated");

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/blog/admin/{id}
pub async fn delete_post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let post = BlogPostRepo::delete(&state.pool, id)
        .await
        .db_context(DELETE_POST)?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    remove_upload(
        &state.config.upload_dir,
        BLOG_UPLOADS,
        post.cover_image_url.as_deref(),
    )
    .await;

    tracing::info!(post_id = id, user_id = admin.user_id, "Blog post deleted");

    Ok(StatusCode::NO_CONTENT)
}
