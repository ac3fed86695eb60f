//! # weave-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `weave-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Membership writes and their denormalized counters share a single
//! transaction here; see `repositories::PgWorkshopMemberRepository`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use weave_db::pool::{create_pool, DatabaseConfig};
//! use weave_db::PgProfileRepository;
//! use weave_core::ProfileRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let profiles = PgProfileRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgClubMemberRepository, PgClubRepository, PgInviteRepository, PgMessageRepository,
    PgProfileRepository, PgReplyRepository, PgSessionRepository, PgThreadRepository,
    PgWorkshopMemberRepository, PgWorkshopRepository,
};
