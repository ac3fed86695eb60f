//! ChatMessage entity - one entry in a workshop's chat log

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum chat message length in characters
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Workshop chat message
///
/// Append-only: messages are never edited. Removal exists only as a
/// moderation action by the sender or the workshop creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub workshop_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new ChatMessage
    pub fn new(id: Uuid, workshop_id: Uuid, sender_id: Uuid, content: String) -> Self {
        Self {
            id,
            workshop_id,
            sender_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check if the content is empty after trimming
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Check if a user sent this message
    #[inline]
    pub fn is_sender(&self, user_id: Uuid) -> bool {
        self.sender_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let sender = Uuid::new_v4();
        let msg = ChatMessage::new(Uuid::new_v4(), Uuid::new_v4(), sender, "hi".to_string());
        assert!(!msg.is_empty());
        assert!(msg.is_sender(sender));
        assert!(!msg.is_sender(Uuid::new_v4()));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let msg = ChatMessage::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "   \t\n ".to_string(),
        );
        assert!(msg.is_empty());
    }
}
