//! Testimonial entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::localization::Localized;
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub author_name: String,
    pub author_role: Option<String>,
    pub author_role_ar: Option<String>,
    pub author_role_fr: Option<String>,
    pub author_role_es: Option<String>,
    pub company: Option<String>,
    pub content: String,
    pub content_ar: Option<String>,
    pub content_fr: Option<String>,
    pub content_es: Option<String>,
    pub avatar_url: Option<String>,
    pub rating: i16,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Localized for Testimonial {
    const LOCALIZED_FIELDS: &'static [&'static str] = &["content", "author_role"];
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTestimonial {
    pub author_name: String,
    pub author_role: Option<String>,
    pub author_role_ar: Option<String>,
    pub author_role_fr: Option<String>,
    pub author_role_es: Option<String>,
    pub company: Option<String>,
    pub content: String,
    pub content_ar: Option<String>,
    pub content_fr: Option<String>,
    pub content_es: Option<String>,
    pub avatar_url: Option<String>,
    /// Defaults to 5 when absent.
    pub rating: Option<i16>,
    /// Defaults to `true` when absent.
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTestimonial {
    pub author_name: Option<String>,
    pub author_role: Option<String>,
    pub author_role_ar: Option<String>,
    pub author_role_fr: Option<String>,
    pub author_role_es: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub content_ar: Option<String>,
    pub content_fr: Option<String>,
    pub content_es: Option<String>,
    pub avatar_url: Option<String>,
    pub rating: Option<i16>,
    pub is_active: Option<bool>,
}
