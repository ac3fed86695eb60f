//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod chat;
pub mod club;
pub mod context;
pub mod error;
pub mod profile;
pub mod stats;
pub mod thread;
pub mod workshop;

// Re-export all services for convenience
pub use auth::AuthService;
pub use chat::ChatService;
pub use club::ClubService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use profile::ProfileService;
pub use stats::StatsService;
pub use thread::ThreadService;
pub use workshop::WorkshopService;
