//! Repository for the `videos` table.

use sitecms_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{CreateVideo, UpdateVideo, Video};

const COLUMNS: &str = "\
    id, title, title_ar, title_fr, title_es, \
    description, description_ar, description_fr, description_es, \
    video_url, thumbnail_url, category, display_order, is_active, \
    created_at, updated_at";

const ORDER: &str = "ORDER BY display_order ASC, id ASC";

/// Provides CRUD operations for gallery videos.
pub struct VideoRepo;

impl VideoRepo {
    pub async fn count_active(pool: &PgPool, category: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM videos \
             WHERE is_active = true AND ($1::TEXT IS NULL OR category = $1)",
        )
        .bind(category)
        .fetch_one(pool)
        .await
    }

    pub async fn list_active(
        pool: &PgPool,
        category: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos \
             WHERE is_active = true AND ($1::TEXT IS NULL OR category = $1) \
             {ORDER} LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn find_active_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM videos")
            .fetch_one(pool)
            .await
    }

    pub async fn list_all(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos {ORDER} LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Video>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos ( \
                 title, title_ar, title_fr, title_es, \
                 description, description_ar, description_fr, description_es, \
                 video_url, thumbnail_url, category, display_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, \
                     COALESCE($12, 0), COALESCE($13, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.title_ar)
            .bind(&input.title_fr)
            .bind(&input.title_es)
            .bind(&input.description)
            .bind(&input.description_ar)
            .bind(&input.description_fr)
            .bind(&input.description_es)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(&input.category)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a video. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET \
                 title = COALESCE($2, title), \
                 title_ar = COALESCE($3, title_ar), \
                 title_fr = COALESCE($4, title_fr), \
                 title_es = COALESCE($5, title_es), \
                 description = COALESCE($6, description), \
                 description_ar = COALESCE($7, description_ar), \
                 description_fr = COALESCE($8, description_fr), \
                 description_es = COALESCE($9, description_es), \
                 video_url = COALESCE($10, video_url), \
                 thumbnail_url = COALESCE($11, thumbnail_url), \
                 category = COALESCE($12, category), \
                 display_order = COALESCE($13, display_order), \
                 is_active = COALESCE($14, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.title_ar)
            .bind(&input.title_fr)
            .bind(&input.title_es)
            .bind(&input.description)
            .bind(&input.description_ar)
            .bind(&input.description_fr)
            .bind(&input.description_es)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(&input.category)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("DELETE FROM videos WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
