//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ClubMemberRepository, ClubRepository, InviteRepository, MessageRepository, ProfileRepository,
    ReplyRepository, RepoResult, SessionRepository, ThreadRepository, WorkshopMemberRepository,
    WorkshopRepository,
};
