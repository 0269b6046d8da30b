//! Blog post entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::localization::Localized;
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub title_es: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_ar: Option<String>,
    pub excerpt_fr: Option<String>,
    pub excerpt_es: Option<String>,
    pub content: String,
    pub content_ar: Option<String>,
    pub content_fr: Option<String>,
    pub content_es: Option<String>,
    pub author: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Localized for BlogPost {
    const LOCALIZED_FIELDS: &'static [&'static str] = &["title", "excerpt", "content"];
}

/// Slug and last-modified time of a published post, for the sitemap.
#[derive(Debug, Clone, FromRow)]
pub struct PublishedSlug {
    pub slug: String,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post. The slug is resolved by the handler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlogPost {
    pub slug: String,
    pub title: String,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub title_es: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_ar: Option<String>,
    pub excerpt_fr: Option<String>,
    pub excerpt_es: Option<String>,
    pub content: String,
    pub content_ar: Option<String>,
    pub content_fr: Option<String>,
    pub content_es: Option<String>,
    pub author: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_published: bool,
}

/// DTO for partially updating a blog post. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlogPost {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub title_es: Option<String>,
    pub excerpt: Option<String>,
    pub excerpt_ar: Option<String>,
    pub excerpt_fr: Option<String>,
    pub excerpt_es: Option<String>,
    pub content: Option<String>,
    pub content_ar: Option<String>,
    pub content_fr: Option<String>,
    pub content_es: Option<String>,
    pub author: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_published: Option<bool>,
}
