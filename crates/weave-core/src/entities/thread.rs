//! Discussion thread entities - community forum threads and their replies

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// How long after posting a reply stays editable
pub const REPLY_EDIT_WINDOW_HOURS: i64 = 24;

/// A community discussion thread
///
/// `reply_count` mirrors the number of reply rows and is only written in the
/// same transaction as the reply insert/delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionThread {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub category: Option<String>,
    pub is_locked: bool,
    pub reply_count: i32,
    pub last_activity_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DiscussionThread {
    /// Create a new DiscussionThread
    pub fn new(id: Uuid, title: String, content: String, author_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            content,
            author_id,
            category: None,
            is_locked: false,
            reply_count: 0,
            last_activity_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user authored this thread
    #[inline]
    pub fn is_author(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}

/// A reply inside a discussion thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadReply {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub parent_reply_id: Option<Uuid>,
    pub content: String,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ThreadReply {
    /// Create a new top-level reply
    pub fn new(id: Uuid, thread_id: Uuid, author_id: Uuid, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            thread_id,
            author_id,
            parent_reply_id: None,
            content,
            is_edited: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a nested reply to another reply in the same thread
    pub fn new_nested(
        id: Uuid,
        thread_id: Uuid,
        author_id: Uuid,
        content: String,
        parent_reply_id: Uuid,
    ) -> Self {
        let mut reply = Self::new(id, thread_id, author_id, content);
        reply.parent_reply_id = Some(parent_reply_id);
        reply
    }

    /// Check if a user authored this reply
    #[inline]
    pub fn is_author(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }

    /// Check if the reply is still inside its edit window at `now`
    pub fn editable_at(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at <= Duration::hours(REPLY_EDIT_WINDOW_HOURS)
    }

    /// Replace the content, marking the reply as edited
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.is_edited = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_creation() {
        let author = Uuid::new_v4();
        let thread = DiscussionThread::new(
            Uuid::new_v4(),
            "Show me your openers".to_string(),
            "Post the first line of your WIP.".to_string(),
            author,
        );
        assert!(!thread.is_locked);
        assert_eq!(thread.reply_count, 0);
        assert!(thread.is_author(author));
    }

    #[test]
    fn test_reply_edit_window() {
        let mut reply = ThreadReply::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "nice".to_string(),
        );
        let now = Utc::now();
        assert!(reply.editable_at(now));
        assert!(reply.editable_at(now + Duration::hours(23)));
        assert!(!reply.editable_at(now + Duration::hours(25)));

        reply.edit("nicer".to_string());
        assert!(reply.is_edited);
        assert_eq!(reply.content, "nicer");
    }

    #[test]
    fn test_nested_reply() {
        let parent_id = Uuid::new_v4();
        let reply = ThreadReply::new_nested(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "agreed".to_string(),
            parent_id,
        );
        assert_eq!(reply.parent_reply_id, Some(parent_id));
    }
}
