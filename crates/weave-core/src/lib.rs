//! # weave-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    generate_invite_code, BookClub, ChatMessage, ClubInvite, ClubMember, DiscussionThread,
    GroupStatus, MemberRole, Profile, Session, ThreadReply, Workshop, WorkshopMember,
};
pub use error::DomainError;
pub use traits::{
    ClubMemberRepository, ClubRepository, InviteRepository, MessageRepository, ProfileRepository,
    ReplyRepository, RepoResult, SessionRepository, ThreadRepository, WorkshopMemberRepository,
    WorkshopRepository,
};
