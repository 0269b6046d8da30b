//! Repository for the `site_content` table.

use sqlx::PgPool;

use crate::models::site_content::{SiteContent, UpsertSiteContent};

const COLUMNS: &str = "\
    id, section_key, value, value_ar, value_fr, value_es, created_at, updated_at";

/// Provides data access for keyed site copy blocks.
pub struct SiteContentRepo;

impl SiteContentRepo {
    /// All content blocks, ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_content ORDER BY section_key");
        sqlx::query_as::<_, SiteContent>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_key(
        pool: &PgPool,
        section_key: &str,
    ) -> Result<Option<SiteContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_content WHERE section_key = $1");
        sqlx::query_as::<_, SiteContent>(&query)
            .bind(section_key)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new block. The caller guarantees `value` is present.
    pub async fn create(
        pool: &PgPool,
        section_key: &str,
        value: &str,
        input: &UpsertSiteContent,
    ) -> Result<SiteContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_content (section_key, value, value_ar, value_fr, value_es) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteContent>(&query)
            .bind(section_key)
            .bind(value)
            .bind(&input.value_ar)
            .bind(&input.value_fr)
            .bind(&input.value_es)
            .fetch_one(pool)
            .await
    }

    /// Partially update an existing block. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        section_key: &str,
        input: &UpsertSiteContent,
    ) -> Result<Option<SiteContent>, sqlx::Error> {
        let query = format!(
            "UPDATE site_content SET \
                 value = COALESCE($2, value), \
                 value_ar = COALESCE($3, value_ar), \
                 value_fr = COALESCE($4, value_fr), \
                 value_es = COALESCE($5, value_es) \
             WHERE section_key = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteContent>(&query)
            .bind(section_key)
            .bind(&input.value)
            .bind(&input.value_ar)
            .bind(&input.value_fr)
            .bind(&input.value_es)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, section_key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_content WHERE section_key = $1")
            .bind(section_key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
