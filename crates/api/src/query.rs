//! Shared query parameter types for API handlers.
//!
//! Paging values arrive as raw strings so that garbage like `?page=abc`
//! falls back to the defaults instead of rejecting the request.

use serde::Deserialize;
use sitecms_core::localization::Language;
use sitecms_core::pagination::PageRequest;

/// `?page=&limit=&lang=&category=` for collection list endpoints.
///
/// `category` is only honoured by integrations and videos.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub lang: Option<String>,
    pub category: Option<String>,
}

impl ListParams {
    pub fn page_request(&self, max_limit: i64) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref(), max_limit)
    }

    pub fn language(&self) -> Language {
        Language::from_tag(self.lang.as_deref())
    }

    /// Category filter with blank values treated as absent.
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// `?lang=` for single-item public endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LangParams {
    pub lang: Option<String>,
}

impl LangParams {
    pub fn language(&self) -> Language {
        Language::from_tag(self.lang.as_deref())
    }
}

/// `?page=&limit=&status=` for the admin lead inbox.
#[derive(Debug, Default, Deserialize)]
pub struct LeadListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
}

impl LeadListParams {
    pub fn page_request(&self, max_limit: i64) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref(), max_limit)
    }

    pub fn status(&self) -> Option<&str> {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
