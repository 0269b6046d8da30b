//! Domain logic shared by the database and API crates.
//!
//! Nothing in here touches the network or the database; every module is
//! plain functions and small value types with unit tests alongside.

pub mod date_format;
pub mod error;
pub mod localization;
pub mod pagination;
pub mod rate_limit;
pub mod roles;
pub mod setup;
pub mod sitemap;
pub mod slug;
pub mod types;
pub mod uploads;
pub mod validation;
