//! Database models - SQLx-compatible structs for PostgreSQL tables

mod club;
mod invite;
mod membership;
mod message;
mod profile;
mod session;
mod thread;
mod workshop;

pub use club::ClubModel;
pub use invite::InviteModel;
pub use membership::{
    ClubMemberModel, ClubMemberWithProfileModel, WorkshopMemberModel,
    WorkshopMemberWithProfileModel,
};
pub use message::{MessageModel, MessageWithSenderModel};
pub use profile::ProfileModel;
pub use session::SessionModel;
pub use thread::{ReplyModel, ReplyWithAuthorModel, ThreadModel, ThreadWithAuthorModel};
pub use workshop::WorkshopModel;
