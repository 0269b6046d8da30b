//! Video gallery entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::localization::Localized;
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub title_es: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub description_es: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Localized for Video {
    const LOCALIZED_FIELDS: &'static [&'static str] = &["title", "description"];
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateVideo {
    pub title: String,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub title_es: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub description_es: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub title_ar: Option<String>,
    pub title_fr: Option<String>,
    pub title_es: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub description_es: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
