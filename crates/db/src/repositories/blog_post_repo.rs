//! Repository for the `blog_posts` table.

use sitecms_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, PublishedSlug, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, slug, \
    title, title_ar, title_fr, title_es, \
    excerpt, excerpt_ar, excerpt_fr, excerpt_es, \
    content, content_ar, content_fr, content_es, \
    author, cover_image_url, is_published, published_at, \
    created_at, updated_at";

/// Newest first; `id` breaks ties between rows created in the same instant.
const ORDER: &str = "ORDER BY created_at DESC, id DESC";

/// Provides CRUD operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Count published posts.
    pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blog_posts WHERE is_published = true")
            .fetch_one(pool)
            .await
    }

    /// One page of published posts, newest first.
    pub async fn list_published(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts WHERE is_published = true {ORDER} LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a published post by slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1 AND is_published = true");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Count all posts regardless of status.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(pool)
            .await
    }

    /// One page of all posts regardless of status, newest first.
    pub async fn list_all(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts {ORDER} LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Find a post by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any post other than `except_id` already uses `slug`.
    pub async fn slug_taken(
        pool: &PgPool,
        slug: &str,
        except_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM blog_posts WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(except_id)
        .fetch_one(pool)
        .await
    }

    /// Insert a new post, returning the created row.
    ///
    /// `published_at` is stamped when the post is created already published.
    pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts ( \
                 slug, title, title_ar, title_fr, title_es, \
                 excerpt, excerpt_ar, excerpt_fr, excerpt_es, \
                 content, content_ar, content_fr, content_es, \
                 author, cover_image_url, is_published, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                     CASE WHEN $16 THEN NOW() ELSE NULL END) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.title_ar)
            .bind(&input.title_fr)
            .bind(&input.title_es)
            .bind(&input.excerpt)
            .bind(&input.excerpt_ar)
            .bind(&input.excerpt_fr)
            .bind(&input.excerpt_es)
            .bind(&input.content)
            .bind(&input.content_ar)
            .bind(&input.content_fr)
            .bind(&input.content_es)
            .bind(&input.author)
            .bind(&input.cover_image_url)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Partially update a post. Only non-`None` fields are applied.
    ///
    /// `published_at` is stamped the first time the post becomes published
    /// and kept afterwards, even if the post is unpublished again.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET \
                 slug = COALESCE($2, slug), \
                 title = COALESCE($3, title), \
                 title_ar = COALESCE($4, title_ar), \
                 title_fr = COALESCE($5, title_fr), \
                 title_es = COALESCE($6, title_es), \
                 excerpt = COALESCE($7, excerpt), \
                 excerpt_ar = COALESCE($8, excerpt_ar), \
                 excerpt_fr = COALESCE($9, excerpt_fr), \
                 excerpt_es = COALESCE($10, excerpt_es), \
                 content = COALESCE($11, content), \
                 content_ar = COALESCE($12, content_ar), \
                 content_fr = COALESCE($13, content_fr), \
                 content_es = COALESCE($14, content_es), \
                 author = COALESCE($15, author), \
                 cover_image_url = COALESCE($16, cover_image_url), \
                 is_published = COALESCE($17, is_published), \
                 published_at = CASE \
                     WHEN COALESCE($17, is_published) AND published_at IS NULL THEN NOW() \
                     ELSE published_at \
                 END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.title_ar)
            .bind(&input.title_fr)
            .bind(&input.title_es)
            .bind(&input.excerpt)
            .bind(&input.excerpt_ar)
            .bind(&input.excerpt_fr)
            .bind(&input.excerpt_es)
            .bind(&input.content)
            .bind(&input.content_ar)
            .bind(&input.content_fr)
            .bind(&input.content_es)
            .bind(&input.author)
            .bind(&input.cover_image_url)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a post, returning the deleted row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("DELETE FROM blog_posts WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Slugs and modification times of every published post, for the sitemap.
    pub async fn list_published_slugs(pool: &PgPool) -> Result<Vec<PublishedSlug>, sqlx::Error> {
        sqlx::query_as::<_, PublishedSlug>(
            "SELECT slug, updated_at FROM blog_posts WHERE is_published = true ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
    }
}
