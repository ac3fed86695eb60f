//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use uuid::Uuid;
use weave_core::DomainError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Like `map_unique_violation`, but hands the violated constraint name to the
/// callback so tables with several unique columns can pick the right error
pub fn map_unique_violation_named<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "profile not found" error
pub fn profile_not_found(id: Uuid) -> DomainError {
    DomainError::ProfileNotFound(id)
}

/// Create a "workshop not found" error
pub fn workshop_not_found(id: Uuid) -> DomainError {
    DomainError::WorkshopNotFound(id)
}

/// Create a "club not found" error
pub fn club_not_found(id: Uuid) -> DomainError {
    DomainError::ClubNotFound(id)
}

/// Create a "message not found" error
pub fn message_not_found(id: Uuid) -> DomainError {
    DomainError::MessageNotFound(id)
}

/// Create a "thread not found" error
pub fn thread_not_found(id: Uuid) -> DomainError {
    DomainError::ThreadNotFound(id)
}

/// Create a "reply not found" error
pub fn reply_not_found(id: Uuid) -> DomainError {
    DomainError::ReplyNotFound(id)
}

/// Create a "membership not found" error
pub fn membership_not_found() -> DomainError {
    DomainError::MembershipNotFound
}

/// Create an "invite not found" error
pub fn invite_not_found(code: &str) -> DomainError {
    DomainError::InviteNotFound(code.to_string())
}
