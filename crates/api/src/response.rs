//! Shared response envelope types for API handlers.
//!
//! Single resources use a `{ "data": ... }` envelope; lists use
//! [`sitecms_core::pagination::Paginated`]. Use [`DataResponse`] instead of
//! ad-hoc `serde_json::json!({ "data": ... })` to get compile-time type
//! safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: post }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
