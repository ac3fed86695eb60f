//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in weave-core.
//! Each repository handles database operations for a specific domain entity.

mod club;
mod club_member;
mod error;
mod invite;
mod message;
mod profile;
mod reply;
mod session;
mod thread;
mod workshop;
mod workshop_member;

pub use club::PgClubRepository;
pub use club_member::PgClubMemberRepository;
pub use invite::PgInviteRepository;
pub use message::PgMessageRepository;
pub use profile::PgProfileRepository;
pub use reply::PgReplyRepository;
pub use session::PgSessionRepository;
pub use thread::PgThreadRepository;
pub use workshop::PgWorkshopRepository;
pub use workshop_member::PgWorkshopMemberRepository;
