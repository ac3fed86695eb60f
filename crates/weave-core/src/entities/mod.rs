//! Domain entities - core business objects

mod club;
mod invite;
mod membership;
mod message;
mod profile;
mod session;
mod status;
mod thread;
mod workshop;

pub use club::{BookClub, DEFAULT_MAX_MEMBERS};
pub use invite::{generate_invite_code, ClubInvite};
pub use membership::{ClubMember, MemberRole, WorkshopMember};
pub use message::{ChatMessage, MAX_MESSAGE_LEN};
pub use profile::Profile;
pub use session::Session;
pub use status::GroupStatus;
pub use thread::{DiscussionThread, ThreadReply, REPLY_EDIT_WINDOW_HOURS};
pub use workshop::{Workshop, DEFAULT_MAX_PARTICIPANTS};
