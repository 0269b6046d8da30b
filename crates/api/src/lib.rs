//! HTTP server for the marketing site content API.
//!
//! Public endpoints serve localized, paginated content; admin endpoints
//! (bearer JWT, `admin` role) manage it. See [`router::build_app_router`].

pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod storage;
