//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and pagination.

mod auth;
mod pagination;
mod validated;

pub use auth::AuthUser;
pub use pagination::{Page, PageParams};
pub use validated::{OptionalValidatedJson, ValidatedJson};
