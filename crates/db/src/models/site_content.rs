//! Keyed, localized copy blocks for the public site.

use serde::{Deserialize, Serialize};
use sitecms_core::localization::Localized;
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `site_content` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteContent {
    pub id: DbId,
    pub section_key: String,
    pub value: String,
    pub value_ar: Option<String>,
    pub value_fr: Option<String>,
    pub value_es: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Localized for SiteContent {
    const LOCALIZED_FIELDS: &'static [&'static str] = &["value"];
}

/// Upsert payload. `value` is required when the key does not exist yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertSiteContent {
    pub value: Option<String>,
    pub value_ar: Option<String>,
    pub value_fr: Option<String>,
    pub value_es: Option<String>,
}
