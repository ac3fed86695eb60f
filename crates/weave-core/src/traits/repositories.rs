//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Membership writes are paired with their denormalized counters: `join` and
//! `leave` insert/delete the membership row and adjust the participant count
//! inside one transaction, returning the new count. The same contract holds
//! for thread replies and `reply_count`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    BookClub, ChatMessage, ClubInvite, ClubMember, DiscussionThread, Profile, Session,
    ThreadReply, Workshop, WorkshopMember,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>>;

    /// Find profile by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Profile>>;

    /// Find profile by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new profile with its credential hash
    async fn create(&self, profile: &Profile, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields (display name, bio, avatar)
    async fn update(&self, profile: &Profile) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Total registered profiles
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Workshop Repository
// ============================================================================

#[async_trait]
pub trait WorkshopRepository: Send + Sync {
    /// Find workshop by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Workshop>>;

    /// List workshops, newest first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Workshop>>;

    /// Create the workshop and the creator's membership in one transaction
    async fn create_with_creator(&self, workshop: &Workshop) -> RepoResult<()>;

    /// Update mutable workshop fields (description, status)
    async fn update(&self, workshop: &Workshop) -> RepoResult<()>;

    /// Bump the last-activity timestamp
    async fn touch_activity(&self, id: Uuid) -> RepoResult<()>;

    /// Computed membership count (for verification against the stored counter)
    async fn member_count(&self, id: Uuid) -> RepoResult<i64>;

    /// Total workshops
    async fn count(&self) -> RepoResult<i64>;

    /// Workshops created by a user
    async fn count_by_creator(&self, creator_id: Uuid) -> RepoResult<i64>;
}

// ============================================================================
// Workshop Member Repository
// ============================================================================

#[async_trait]
pub trait WorkshopMemberRepository: Send + Sync {
    /// Find a membership by workshop and user ID
    async fn find(&self, workshop_id: Uuid, user_id: Uuid) -> RepoResult<Option<WorkshopMember>>;

    /// List members of a workshop with their profiles, ascending by joined_at
    async fn find_by_workshop(
        &self,
        workshop_id: Uuid,
    ) -> RepoResult<Vec<(WorkshopMember, Profile)>>;

    /// Membership gate: is the user currently a member?
    async fn is_member(&self, workshop_id: Uuid, user_id: Uuid) -> RepoResult<bool>;

    /// Insert the membership row and increment the participant counter in one
    /// transaction; returns the new count. A duplicate pair surfaces as
    /// `DomainError::AlreadyMember`.
    async fn join(&self, member: &WorkshopMember) -> RepoResult<i32>;

    /// Delete the membership row and decrement the participant counter
    /// (floored at zero) in one transaction; returns the new count.
    /// `DomainError::MembershipNotFound` when no row exists.
    async fn leave(&self, workshop_id: Uuid, user_id: Uuid) -> RepoResult<i32>;
}

// ============================================================================
// Book Club Repository
// ============================================================================

#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Find club by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<BookClub>>;

    /// List clubs, newest first
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<BookClub>>;

    /// Create the club and the creator's membership in one transaction
    async fn create_with_creator(&self, club: &BookClub) -> RepoResult<()>;

    /// Update mutable club fields (description, current book)
    async fn update(&self, club: &BookClub) -> RepoResult<()>;

    /// Computed membership count (for verification against the stored counter)
    async fn member_count(&self, id: Uuid) -> RepoResult<i64>;

    /// Total clubs
    async fn count(&self) -> RepoResult<i64>;

    /// Clubs created by a user
    async fn count_by_creator(&self, creator_id: Uuid) -> RepoResult<i64>;
}

// ============================================================================
// Club Member Repository
// ============================================================================

#[async_trait]
pub trait ClubMemberRepository: Send + Sync {
    /// Find a membership by club and user ID
    async fn find(&self, club_id: Uuid, user_id: Uuid) -> RepoResult<Option<ClubMember>>;

    /// List members of a club with their profiles, ascending by joined_at
    async fn find_by_club(&self, club_id: Uuid) -> RepoResult<Vec<(ClubMember, Profile)>>;

    /// Membership gate: is the user currently a member?
    async fn is_member(&self, club_id: Uuid, user_id: Uuid) -> RepoResult<bool>;

    /// Insert + counter increment in one transaction; returns the new count
    async fn join(&self, member: &ClubMember) -> RepoResult<i32>;

    /// Delete + counter decrement (floored at zero) in one transaction;
    /// returns the new count
    async fn leave(&self, club_id: Uuid, user_id: Uuid) -> RepoResult<i32>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ChatMessage>>;

    /// List a workshop's messages with sender profiles, ascending by
    /// created_at, oldest first, capped at `limit`
    async fn find_by_workshop(
        &self,
        workshop_id: Uuid,
        limit: i64,
    ) -> RepoResult<Vec<(ChatMessage, Profile)>>;

    /// Append a message
    async fn create(&self, message: &ChatMessage) -> RepoResult<()>;

    /// Remove a message (moderation)
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Total messages
    async fn count(&self) -> RepoResult<i64>;

    /// Messages created at or after `since`
    async fn count_since(&self, since: DateTime<Utc>) -> RepoResult<i64>;
}

// ============================================================================
// Thread Repository
// ============================================================================

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find thread by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DiscussionThread>>;

    /// List threads with author profiles, most recent activity first
    async fn list(&self, limit: i64, offset: i64)
        -> RepoResult<Vec<(DiscussionThread, Profile)>>;

    /// Create a new thread
    async fn create(&self, thread: &DiscussionThread) -> RepoResult<()>;

    /// Lock or unlock a thread for new replies
    async fn set_locked(&self, id: Uuid, locked: bool) -> RepoResult<()>;

    /// Total threads
    async fn count(&self) -> RepoResult<i64>;

    /// Threads created at or after `since`
    async fn count_since(&self, since: DateTime<Utc>) -> RepoResult<i64>;

    /// Threads authored by a user
    async fn count_by_author(&self, author_id: Uuid) -> RepoResult<i64>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Find reply by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ThreadReply>>;

    /// List a thread's replies with author profiles, ascending by created_at
    async fn find_by_thread(&self, thread_id: Uuid) -> RepoResult<Vec<(ThreadReply, Profile)>>;

    /// Insert the reply, increment the thread's reply_count, and bump its
    /// last_activity_at in one transaction
    async fn create(&self, reply: &ThreadReply) -> RepoResult<()>;

    /// Update reply content (edit)
    async fn update(&self, reply: &ThreadReply) -> RepoResult<()>;

    /// Delete the reply and decrement the thread's reply_count (floored at
    /// zero) in one transaction
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Invite Repository
// ============================================================================

#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Find invite by code
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<ClubInvite>>;

    /// List invites for a club
    async fn find_by_club(&self, club_id: Uuid) -> RepoResult<Vec<ClubInvite>>;

    /// Create a new invite
    async fn create(&self, invite: &ClubInvite) -> RepoResult<()>;

    /// Increment the redemption count
    async fn increment_uses(&self, code: &str) -> RepoResult<()>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find session by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Session>>;

    /// Persist a new session (login)
    async fn create(&self, session: &Session) -> RepoResult<()>;

    /// Delete a session (logout); missing rows are not an error
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}
