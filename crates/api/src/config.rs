use std::path::PathBuf;
use std::time::Duration;

use sitecms_core::date_format::DEFAULT_CAPACITY;
use sitecms_core::rate_limit::RateLimit;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Secret guarding `POST /api/auth/create-admin`. Unset disables setup.
    pub setup_secret: Option<String>,
    /// Root directory for uploaded media (default: `uploads`).
    pub upload_dir: PathBuf,
    /// Maximum request body size in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Public site origin used in the sitemap (default: `http://localhost:3000`).
    pub site_url: String,
    /// Capacity of the localized date-label cache (default: `512`).
    pub date_cache_capacity: usize,
    /// Per-client limits for public write endpoints.
    pub rate_limits: RateLimitConfig,
}

/// Rate limiter settings.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub window_secs: u64,
    pub login_max: u32,
    pub leads_max: u32,
}

impl RateLimitConfig {
    pub fn login(&self) -> RateLimit {
        RateLimit {
            max_requests: self.login_max,
            window: Duration::from_secs(self.window_secs),
        }
    }

    pub fn leads(&self) -> RateLimit {
        RateLimit {
            max_requests: self.leads_max,
            window: Duration::from_secs(self.window_secs),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 900,
            login_max: 10,
            leads_max: 5,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `SETUP_SECRET`           | unset                      |
    /// | `UPLOAD_DIR`             | `uploads`                  |
    /// | `MAX_UPLOAD_BYTES`       | `10485760`                 |
    /// | `SITE_URL`               | `http://localhost:3000`    |
    /// | `DATE_CACHE_CAPACITY`    | `512`                      |
    /// | `RATE_LIMIT_WINDOW_SECS` | `900`                      |
    /// | `RATE_LIMIT_LOGIN_MAX`   | `10`                       |
    /// | `RATE_LIMIT_LEADS_MAX`   | `5`                        |
    ///
    /// JWT settings are documented on [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = env_parse("PORT", 3000);

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_parse("REQUEST_TIMEOUT_SECS", 30);

        let setup_secret = std::env::var("SETUP_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let upload_dir = PathBuf::from(
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()),
        );

        let max_upload_bytes: usize = env_parse("MAX_UPLOAD_BYTES", 10 * 1024 * 1024);

        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let date_cache_capacity: usize = env_parse("DATE_CACHE_CAPACITY", DEFAULT_CAPACITY);

        let defaults = RateLimitConfig::default();
        let rate_limits = RateLimitConfig {
            window_secs: env_parse("RATE_LIMIT_WINDOW_SECS", defaults.window_secs),
            login_max: env_parse("RATE_LIMIT_LOGIN_MAX", defaults.login_max),
            leads_max: env_parse("RATE_LIMIT_LEADS_MAX", defaults.leads_max),
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            setup_secret,
            upload_dir,
            max_upload_bytes,
            site_url,
            date_cache_capacity,
            rate_limits,
        }
    }
}

/// Read and parse an environment variable, falling back to `default` when
/// unset.
///
/// # Panics
///
/// Panics if the variable is set but does not parse, so misconfiguration
/// fails at startup.
fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid value: {e}")),
        Err(_) => default,
    }
}
