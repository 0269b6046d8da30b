use std::sync::Arc;

use sitecms_core::date_format::DateFormatCache;
use sitecms_core::rate_limit::{RateLimiter, BUCKET_LEADS, BUCKET_LOGIN};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sitecms_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Bounded cache of localized long-form date labels.
    pub date_cache: Arc<DateFormatCache>,
    /// Per-client request limiter for login and lead submission.
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Build state from a pool and configuration, constructing the cache and
    /// limiter from the configured sizes.
    pub fn new(pool: sitecms_db::DbPool, config: ServerConfig) -> Self {
        let date_cache = DateFormatCache::new(config.date_cache_capacity);
        let rate_limiter = RateLimiter::new()
            .with_limit(BUCKET_LOGIN, config.rate_limits.login())
            .with_limit(BUCKET_LEADS, config.rate_limits.leads());

        Self {
            pool,
            config: Arc::new(config),
            date_cache: Arc::new(date_cache),
            rate_limiter: Arc::new(rate_limiter),
        }
    }
}
