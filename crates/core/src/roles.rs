//! Role names stored in `users.role` and embedded in JWT claims.

/// Full access to every admin endpoint.
pub const ROLE_ADMIN: &str = "admin";
