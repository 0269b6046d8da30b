//! Repository for the `testimonials` table.

use sitecms_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

const COLUMNS: &str = "\
    id, author_name, \
    author_role, author_role_ar, author_role_fr, author_role_es, \
    company, content, content_ar, content_fr, content_es, \
    avatar_url, rating, is_active, created_at, updated_at";

const ORDER: &str = "ORDER BY created_at DESC, id DESC";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM testimonials WHERE is_active = true")
            .fetch_one(pool)
            .await
    }

    pub async fn list_active(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials WHERE is_active = true {ORDER} LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1 AND is_active = true");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM testimonials")
            .fetch_one(pool)
            .await
    }

    pub async fn list_all(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials {ORDER} LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new testimonial. Missing `rating` defaults to 5 and missing
    /// `is_active` to `true`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials ( \
                 author_name, author_role, author_role_ar, author_role_fr, author_role_es, \
                 company, content, content_ar, content_fr, content_es, \
                 avatar_url, rating, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, \
                     COALESCE($12, 5), COALESCE($13, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.author_name)
            .bind(&input.author_role)
            .bind(&input.author_role_ar)
            .bind(&input.author_role_fr)
            .bind(&input.author_role_es)
            .bind(&input.company)
            .bind(&input.content)
            .bind(&input.content_ar)
            .bind(&input.content_fr)
            .bind(&input.content_es)
            .bind(&input.avatar_url)
            .bind(input.rating)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a testimonial. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                 author_name = COALESCE($2, author_name), \
                 author_role = COALESCE($3, author_role), \
                 author_role_ar = COALESCE($4, author_role_ar), \
                 author_role_fr = COALESCE($5, author_role_fr), \
                 author_role_es = COALESCE($6, author_role_es), \
                 company = COALESCE($7, company), \
                 content = COALESCE($8, content), \
                 content_ar = COALESCE($9, content_ar), \
                 content_fr = COALESCE($10, content_fr), \
                 content_es = COALESCE($11, content_es), \
                 avatar_url = COALESCE($12, avatar_url), \
                 rating = COALESCE($13, rating), \
                 is_active = COALESCE($14, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.author_name)
            .bind(&input.author_role)
            .bind(&input.author_role_ar)
            .bind(&input.author_role_fr)
            .bind(&input.author_role_es)
            .bind(&input.company)
            .bind(&input.content)
            .bind(&input.content_ar)
            .bind(&input.content_fr)
            .bind(&input.content_es)
            .bind(&input.avatar_url)
            .bind(input.rating)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a testimonial, returning the deleted row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("DELETE FROM testimonials WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
