//! ChatMessage entity <-> model mapper

use weave_core::{ChatMessage, Profile};

use crate::models::{MessageModel, MessageWithSenderModel};

/// Convert MessageModel to ChatMessage entity
impl From<MessageModel> for ChatMessage {
    fn from(model: MessageModel) -> Self {
        ChatMessage {
            id: model.id,
            workshop_id: model.workshop_id,
            sender_id: model.sender_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

/// Split a sender-joined message row into its entity pair
pub fn message_with_sender(model: MessageWithSenderModel) -> (ChatMessage, Profile) {
    let message = ChatMessage {
        id: model.id,
        workshop_id: model.workshop_id,
        sender_id: model.sender_id,
        content: model.content,
        created_at: model.created_at,
    };
    let sender = Profile {
        id: model.sender_id,
        username: model.username,
        email: model.email,
        display_name: model.display_name,
        avatar_url: model.avatar_url,
        bio: model.bio,
        created_at: model.profile_created_at,
        updated_at: model.profile_updated_at,
    };
    (message, sender)
}
