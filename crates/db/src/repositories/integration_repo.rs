//! Repository for the `integrations` table.

use sitecms_core::types::DbId;
use sqlx::PgPool;

use crate::models::integration::{CreateIntegration, Integration, UpdateIntegration};

const COLUMNS: &str = "\
    id, name, category, \
    description, description_ar, description_fr, description_es, \
    logo_url, website_url, display_order, is_active, created_at, updated_at";

/// Admin-curated order; `id` keeps equal orders stable.
const ORDER: &str = "ORDER BY display_order ASC, id ASC";

/// Provides CRUD operations for integrations.
pub struct IntegrationRepo;

impl IntegrationRepo {
    /// Count active integrations, optionally restricted to one category.
    pub async fn count_active(pool: &PgPool, category: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM integrations \
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
    ) -> Result<Vec<Integration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM integrations \
             WHERE is_active = true AND ($1::TEXT IS NULL OR category = $1) \
             {ORDER} LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Integration>(&query)
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Integration>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM integrations WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, Integration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Distinct categories among active integrations, alphabetically.
    pub async fn list_active_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM integrations WHERE is_active = true ORDER BY category",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM integrations")
            .fetch_one(pool)
            .await
    }

    pub async fn list_all(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Integration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM integrations {ORDER} LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Integration>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Integration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM integrations WHERE id = $1");
        sqlx::query_as::<_, Integration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateIntegration,
    ) -> Result<Integration, sqlx::Error> {
        let query = format!(
            "INSERT INTO integrations ( \
                 name, category, description, description_ar, description_fr, description_es, \
                 logo_url, website_url, display_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 0), COALESCE($10, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Integration>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.description_ar)
            .bind(&input.description_fr)
            .bind(&input.description_es)
            .bind(&input.logo_url)
            .bind(&input.website_url)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update an integration. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIntegration,
    ) -> Result<Option<Integration>, sqlx::Error> {
        let query = format!(
            "UPDATE integrations SET \
                 name = COALESCE($2, name), \
                 category = COALESCE($3, category), \
                 description = COALESCE($4, description), \
                 description_ar = COALESCE($5, description_ar), \
                 description_fr = COALESCE($6, description_fr), \
                 description_es = COALESCE($7, description_es), \
                 logo_url = COALESCE($8, logo_url), \
                 website_url = COALESCE($9, website_url), \
                 display_order = COALESCE($10, display_order), \
                 is_active = COALESCE($11, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Integration>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.description_ar)
            .bind(&input.description_fr)
            .bind(&input.description_es)
            .bind(&input.logo_url)
            .bind(&input.website_url)
            .bind(input.display_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Integration>, sqlx::Error> {
        let query = format!("DELETE FROM integrations WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Integration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
