//! Thread and reply entity <-> model mappers

use weave_core::{DiscussionThread, Profile, ThreadReply};

use crate::models::{ReplyModel, ReplyWithAuthorModel, ThreadModel, ThreadWithAuthorModel};

/// Convert ThreadModel to DiscussionThread entity
impl From<ThreadModel> for DiscussionThread {
    fn from(model: ThreadModel) -> Self {
        DiscussionThread {
            id: model.id,
            title: model.title,
            content: model.content,
            author_id: model.author_id,
            category: model.category,
            is_locked: model.is_locked,
            reply_count: model.reply_count,
            last_activity_at: model.last_activity_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert ReplyModel to ThreadReply entity
impl From<ReplyModel> for ThreadReply {
    fn from(model: ReplyModel) -> Self {
        ThreadReply {
            id: model.id,
            thread_id: model.thread_id,
            author_id: model.author_id,
            parent_reply_id: model.parent_reply_id,
            content: model.content,
            is_edited: model.is_edited,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Split an author-joined thread row into its entity pair
pub fn thread_with_author(model: ThreadWithAuthorModel) -> (DiscussionThread, Profile) {
    let thread = DiscussionThread {
        id: model.id,
        title: model.title,
        content: model.content,
        author_id: model.author_id,
        category: model.category,
        is_locked: model.is_locked,
        reply_count: model.reply_count,
        last_activity_at: model.last_activity_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    };
    let author = Profile {
        id: model.author_id,
        username: model.username,
        email: model.email,
        display_name: model.display_name,
        avatar_url: model.avatar_url,
        bio: model.bio,
        created_at: model.profile_created_at,
        updated_at: model.profile_updated_at,
    };
    (thread, author)
}

/// Split an author-joined reply row into its entity pair
pub fn reply_with_author(model: ReplyWithAuthorModel) -> (ThreadReply, Profile) {
    let reply = ThreadReply {
        id: model.id,
        thread_id: model.thread_id,
        author_id: model.author_id,
        parent_reply_id: model.parent_reply_id,
        content: model.content,
        is_edited: model.is_edited,
        created_at: model.created_at,
        updated_at: model.updated_at,
    };
    let author = Profile {
        id: model.author_id,
        username: model.username,
        email: model.email,
        display_name: model.display_name,
        avatar_url: model.avatar_url,
        bio: model.bio,
        created_at: model.profile_created_at,
        updated_at: model.profile_updated_at,
    };
    (reply, author)
}
