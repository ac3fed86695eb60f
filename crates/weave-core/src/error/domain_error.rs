//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    ProfileNotFound(Uuid),

    #[error("Workshop not found: {0}")]
    WorkshopNotFound(Uuid),

    #[error("Book club not found: {0}")]
    ClubNotFound(Uuid),

    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    #[error("Thread not found: {0}")]
    ThreadNotFound(Uuid),

    #[error("Reply not found: {0}")]
    ReplyNotFound(Uuid),

    #[error("Not a member")]
    MembershipNotFound,

    #[error("Invite not found: {0}")]
    InviteNotFound(String),

    #[error("Session not found")]
    SessionNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Parent reply belongs to a different thread")]
    InvalidParentReply,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You must be a member to access this")]
    NotMember,

    #[error("This club is private")]
    PrivateClub,

    #[error("Only the creator can do this")]
    NotCreator,

    #[error("Only the author can do this")]
    NotAuthor,

    #[error("Thread is locked")]
    ThreadLocked,

    #[error("Edit window has closed")]
    EditWindowClosed,

    #[error("Invite has expired")]
    InviteExpired,

    #[error("Invite has reached maximum uses")]
    InviteExhausted,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already a member")]
    AlreadyMember,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Creator cannot leave; close the workshop or club instead")]
    CreatorCannotLeave,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProfileNotFound(_) => "UNKNOWN_USER",
            Self::WorkshopNotFound(_) => "UNKNOWN_WORKSHOP",
            Self::ClubNotFound(_) => "UNKNOWN_CLUB",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::ThreadNotFound(_) => "UNKNOWN_THREAD",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",
            Self::MembershipNotFound => "UNKNOWN_MEMBER",
            Self::InviteNotFound(_) => "UNKNOWN_INVITE",
            Self::SessionNotFound => "UNKNOWN_SESSION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidParentReply => "INVALID_PARENT_REPLY",

            // Authorization
            Self::NotMember => "NOT_A_MEMBER",
            Self::PrivateClub => "PRIVATE_CLUB",
            Self::NotCreator => "NOT_CREATOR",
            Self::NotAuthor => "NOT_AUTHOR",
            Self::ThreadLocked => "THREAD_LOCKED",
            Self::EditWindowClosed => "EDIT_WINDOW_CLOSED",
            Self::InviteExpired => "INVITE_EXPIRED",
            Self::InviteExhausted => "INVITE_EXHAUSTED",

            // Conflict
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::CreatorCannotLeave => "CREATOR_CANNOT_LEAVE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound(_)
                | Self::WorkshopNotFound(_)
                | Self::ClubNotFound(_)
                | Self::MessageNotFound(_)
                | Self::ThreadNotFound(_)
                | Self::ReplyNotFound(_)
                | Self::MembershipNotFound
                | Self::InviteNotFound(_)
                | Self::SessionNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyMessage
                | Self::ContentTooLong { .. }
                | Self::InvalidParentReply
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotMember
                | Self::PrivateClub
                | Self::NotCreator
                | Self::NotAuthor
                | Self::ThreadLocked
                | Self::EditWindowClosed
                | Self::InviteExpired
                | Self::InviteExhausted
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyMember
                | Self::UsernameTaken
                | Self::EmailAlreadyExists
                | Self::CreatorCannotLeave
        )
    }
}
