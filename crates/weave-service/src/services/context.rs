//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use uuid::Uuid;
use weave_common::auth::JwtService;
use weave_core::traits::{
    ClubMemberRepository, ClubRepository, InviteRepository, MessageRepository, ProfileRepository,
    ReplyRepository, SessionRepository, ThreadRepository, WorkshopMemberRepository,
    WorkshopRepository,
};
use weave_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    profile_repo: Arc<dyn ProfileRepository>,
    workshop_repo: Arc<dyn WorkshopRepository>,
    workshop_member_repo: Arc<dyn WorkshopMemberRepository>,
    club_repo: Arc<dyn ClubRepository>,
    club_member_repo: Arc<dyn ClubMemberRepository>,
    message_repo: Arc<dyn MessageRepository>,
    thread_repo: Arc<dyn ThreadRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    invite_repo: Arc<dyn InviteRepository>,
    session_repo: Arc<dyn SessionRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        profile_repo: Arc<dyn ProfileRepository>,
        workshop_repo: Arc<dyn WorkshopRepository>,
        workshop_member_repo: Arc<dyn WorkshopMemberRepository>,
        club_repo: Arc<dyn ClubRepository>,
        club_member_repo: Arc<dyn ClubMemberRepository>,
        message_repo: Arc<dyn MessageRepository>,
        thread_repo: Arc<dyn ThreadRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
        invite_repo: Arc<dyn InviteRepository>,
        session_repo: Arc<dyn SessionRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            profile_repo,
            workshop_repo,
            workshop_member_repo,
            club_repo,
            club_member_repo,
            message_repo,
            thread_repo,
            reply_repo,
            invite_repo,
            session_repo,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the workshop repository
    pub fn workshop_repo(&self) -> &dyn WorkshopRepository {
        self.workshop_repo.as_ref()
    }

    /// Get the workshop member repository
    pub fn workshop_member_repo(&self) -> &dyn WorkshopMemberRepository {
        self.workshop_member_repo.as_ref()
    }

    /// Get the book club repository
    pub fn club_repo(&self) -> &dyn ClubRepository {
        self.club_repo.as_ref()
    }

    /// Get the club member repository
    pub fn club_member_repo(&self) -> &dyn ClubMemberRepository {
        self.club_member_repo.as_ref()
    }

    /// Get the chat message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the discussion thread repository
    pub fn thread_repo(&self) -> &dyn ThreadRepository {
        self.thread_repo.as_ref()
    }

    /// Get the thread reply repository
    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    /// Get the club invite repository
    pub fn invite_repo(&self) -> &dyn InviteRepository {
        self.invite_repo.as_ref()
    }

    /// Get the session repository
    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new entity ID
    pub fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    workshop_repo: Option<Arc<dyn WorkshopRepository>>,
    workshop_member_repo: Option<Arc<dyn WorkshopMemberRepository>>,
    club_repo: Option<Arc<dyn ClubRepository>>,
    club_member_repo: Option<Arc<dyn ClubMemberRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    thread_repo: Option<Arc<dyn ThreadRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    invite_repo: Option<Arc<dyn InviteRepository>>,
    session_repo: Option<Arc<dyn SessionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            profile_repo: None,
            workshop_repo: None,
            workshop_member_repo: None,
            club_repo: None,
            club_member_repo: None,
            message_repo: None,
            thread_repo: None,
            reply_repo: None,
            invite_repo: None,
            session_repo: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn workshop_repo(mut self, repo: Arc<dyn WorkshopRepository>) -> Self {
        self.workshop_repo = Some(repo);
        self
    }

    pub fn workshop_member_repo(mut self, repo: Arc<dyn WorkshopMemberRepository>) -> Self {
        self.workshop_member_repo = Some(repo);
        self
    }

    pub fn club_repo(mut self, repo: Arc<dyn ClubRepository>) -> Self {
        self.club_repo = Some(repo);
        self
    }

    pub fn club_member_repo(mut self, repo: Arc<dyn ClubMemberRepository>) -> Self {
        self.club_member_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn thread_repo(mut self, repo: Arc<dyn ThreadRepository>) -> Self {
        self.thread_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn invite_repo(mut self, repo: Arc<dyn InviteRepository>) -> Self {
        self.invite_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.profile_repo.ok_or_else(|| super::error::ServiceError::validation("profile_repo is required"))?,
            self.workshop_repo.ok_or_else(|| super::error::ServiceError::validation("workshop_repo is required"))?,
            self.workshop_member_repo.ok_or_else(|| super::error::ServiceError::validation("workshop_member_repo is required"))?,
            self.club_repo.ok_or_else(|| super::error::ServiceError::validation("club_repo is required"))?,
            self.club_member_repo.ok_or_else(|| super::error::ServiceError::validation("club_member_repo is required"))?,
            self.message_repo.ok_or_else(|| super::error::ServiceError::validation("message_repo is required"))?,
            self.thread_repo.ok_or_else(|| super::error::ServiceError::validation("thread_repo is required"))?,
            self.reply_repo.ok_or_else(|| super::error::ServiceError::validation("reply_repo is required"))?,
            self.invite_repo.ok_or_else(|| super::error::ServiceError::validation("invite_repo is required"))?,
            self.session_repo.ok_or_else(|| super::error::ServiceError::validation("session_repo is required"))?,
            self.jwt_service.ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
