//! Entity to model mappers
//!
//! This module provides conversions between domain entities (weave-core) and
//! database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*_with_profile` functions: Split profile-joined rows into entity pairs

mod club;
mod invite;
mod membership;
mod message;
mod profile;
mod session;
mod thread;
mod workshop;

pub use membership::{club_member_with_profile, workshop_member_with_profile};
pub use message::message_with_sender;
pub use thread::{reply_with_author, thread_with_author};
