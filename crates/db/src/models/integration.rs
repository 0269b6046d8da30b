//! Integration (partner/tool logo card) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitecms_core::localization::Localized;
use sitecms_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `integrations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Integration {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub description_es: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Localized for Integration {
    const LOCALIZED_FIELDS: &'static [&'static str] = &["description"];
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateIntegration {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub description_es: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    /// Defaults to 0 when absent.
    pub display_order: Option<i32>,
    /// Defaults to `true` when absent.
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateIntegration {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub description_fr: Option<String>,
    pub description_es: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
