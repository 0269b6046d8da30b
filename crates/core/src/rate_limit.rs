//! Fixed-window request limiter for public write endpoints.
//!
//! Keys are `(bucket, client)` pairs; each key may make `max_requests`
//! requests per `window`. State is in-process and lost on restart.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Bucket for `POST /auth/login`.
pub const BUCKET_LOGIN: &str = "login";

/// Bucket for `POST /leads`.
pub const BUCKET_LEADS: &str = "leads";

/// Limit for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub max_requests: u32,
    pub window: Duration,
}

/// Outcome of a [`RateLimiter::check`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug, Default)]
pub struct RateLimiter {
    limits: HashMap<&'static str, RateLimit>,
    windows: Mutex<HashMap<(&'static str, String), Window>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the limit for `bucket`.
    pub fn with_limit(mut self, bucket: &'static str, limit: RateLimit) -> Self {
        self.limits.insert(bucket, limit);
        self
    }

    /// Record a request and decide whether it may proceed.
    ///
    /// Buckets without a registered limit are always allowed.
    pub fn check(&self, bucket: &'static str, client: &str) -> RateDecision {
        self.check_at(bucket, client, Instant::now())
    }

    fn check_at(&self, bucket: &'static str, client: &str, now: Instant) -> RateDecision {
        let Some(limit) = self.limits.get(bucket).copied() else {
            return RateDecision::Allowed { remaining: u32::MAX };
        };

        let mut windows = self.windows.lock().unwrap_or_else(|p| p.into_inner());

        // Drop expired windows so the map does not grow without bound.
        windows.retain(|(b, _), w| {
            self.limits
                .get(b)
                .is_some_and(|l| now.duration_since(w.started) < l.window)
        });

        let window = windows
            .entry((bucket, client.to_string()))
            .or_insert(Window { started: now, count: 0 });

        if window.count >= limit.max_requests {
            let elapsed = now.duration_since(window.started);
            return RateDecision::Limited {
                retry_after: limit.window.saturating_sub(elapsed),
            };
        }

        window.count += 1;
        RateDecision::Allowed {
            remaining: limit.max_requests - window.count,
        }
    }
}
