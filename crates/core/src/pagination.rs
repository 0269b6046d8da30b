//! Page-based pagination shared by every content collection.
//!
//! Public and admin list endpoints accept `?page=&limit=` as raw strings.
//! Out-of-range or unparseable values are silently clamped to the nearest
//! valid value; pagination never produces an error.

use serde::Serialize;

/// Page used when `?page=` is absent or unparseable.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `?limit=` is absent or unparseable.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper page-size bound for most collections.
pub const MAX_LIMIT: i64 = 100;

/// Upper page-size bound for integrations, which the site lists in bulk.
pub const MAX_LIMIT_BULK: i64 = 500;

/// A validated page request: `page >= 1`, `1 <= limit <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a page request from raw query values.
    ///
    /// Missing or unparseable values take the defaults (`page=1`,
    /// `limit=10`), then `limit` is clamped into `[1, max_limit]` and `page`
    /// to at least 1.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, max_limit: i64) -> Self {
        let page = parse_or(page, DEFAULT_PAGE);
        let limit = parse_or(limit, DEFAULT_LIMIT);
        Self::clamped(page, limit, max_limit)
    }

    /// Clamp already-numeric values into range.
    pub fn clamped(page: i64, limit: i64, max_limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, max_limit.max(1)),
        }
    }

    /// Row offset for the SQL `OFFSET` clause.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

/// Page metadata returned alongside every paginated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total = total.max(0);
        let limit = limit.max(1);
        let total_pages = (total + limit - 1) / limit;
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    pub fn for_request(req: PageRequest, total: i64) -> Self {
        Self::new(req.page, req.limit, total)
    }
}

/// `{ "data": [...], "pagination": {...} }` envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(data: Vec<T>, req: PageRequest, total: i64) -> Self {
        Self {
            data,
            pagination: PageMeta::for_request(req, total),
        }
    }

    /// Transform each item while keeping the page metadata.
    pub fn map<U: Serialize, E>(
        self,
        f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<Paginated<U>, E> {
        let data = self.data.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(Paginated {
            data,
            pagination: self.pagination,
        })
    }
}
