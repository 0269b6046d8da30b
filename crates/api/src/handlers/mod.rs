pub mod auth;
pub mod blog;
pub mod integrations;
pub mod leads;
pub mod site_content;
pub mod sitemap;
pub mod testimonials;
pub mod videos;

use serde_json::Value;
use sitecms_core::error::CoreError;
use sitecms_core::localization::{Language, Localized};
use sitecms_core::pagination::Paginated;
use sitecms_core::rate_limit::RateDecision;

use crate::error::{AppError, AppResult};
use crate::middleware::client_ip::ClientIp;
use crate::state::AppState;

/// Localize every row of a page, keeping the page metadata.
pub(crate) fn localize_page<T: Localized>(
    page: Paginated<T>,
    lang: Language,
) -> AppResult<Paginated<Value>> {
    page.map(|row| row.localized(lang)).map_err(serialization_error)
}

pub(crate) fn localize_one<T: Localized>(row: &T, lang: Language) -> AppResult<Value> {
    row.localized(lang).map_err(serialization_error)
}

pub(crate) fn serialization_error(err: serde_json::Error) -> AppError {
    AppError::InternalError(format!("Failed to serialize row: {err}"))
}

/// Count a request against `bucket` for this client; 429 once exhausted.
pub(crate) fn enforce_rate_limit(
    state: &AppState,
    bucket: &'static str,
    client: &ClientIp,
) -> AppResult<()> {
    match state.rate_limiter.check(bucket, &client.0) {
        RateDecision::Allowed { .. } => Ok(()),
        RateDecision::Limited { retry_after } => {
            tracing::warn!(
                bucket,
                client = %client.0,
                retry_after_secs = retry_after.as_secs(),
                "Rate limit exceeded",
            );
            Err(CoreError::RateLimited(format!(
                "Too many requests. Try again in {} seconds",
                retry_after.as_secs().max(1)
            ))
            .into())
        }
    }
}
