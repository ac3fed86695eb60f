//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod clubs;
pub mod health;
pub mod invites;
pub mod members;
pub mod messages;
pub mod profiles;
pub mod replies;
pub mod stats;
pub mod threads;
pub mod workshops;
