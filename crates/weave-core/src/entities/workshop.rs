//! Workshop entity - a collaborative writing project with chat

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::status::GroupStatus;

/// Default participant cap applied when the creator does not pick one
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 10;

/// Workshop entity
///
/// `current_participants` mirrors the number of membership rows and is only
/// ever written in the same transaction as the membership change itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workshop {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub creator_id: Uuid,
    pub max_participants: i32,
    pub current_participants: i32,
    pub status: GroupStatus,
    pub last_activity_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workshop {
    /// Create a new Workshop; the creator is the first participant
    pub fn new(id: Uuid, title: String, creator_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: None,
            genre: None,
            creator_id,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            current_participants: 1,
            status: GroupStatus::Recruiting,
            last_activity_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user created this workshop
    #[inline]
    pub fn is_creator(&self, user_id: Uuid) -> bool {
        self.creator_id == user_id
    }

    /// Check if the workshop has been closed
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.status == GroupStatus::Closed
    }

    /// Update the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Update the lifecycle status
    pub fn set_status(&mut self, status: GroupStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workshop_creation() {
        let creator = Uuid::new_v4();
        let workshop = Workshop::new(Uuid::new_v4(), "Flash Fiction".to_string(), creator);
        assert_eq!(workshop.title, "Flash Fiction");
        assert_eq!(workshop.current_participants, 1);
        assert_eq!(workshop.max_participants, DEFAULT_MAX_PARTICIPANTS);
        assert_eq!(workshop.status, GroupStatus::Recruiting);
        assert!(workshop.is_creator(creator));
        assert!(!workshop.is_creator(Uuid::new_v4()));
    }

    #[test]
    fn test_status_change() {
        let mut workshop = Workshop::new(Uuid::new_v4(), "Test".to_string(), Uuid::new_v4());
        assert!(!workshop.is_closed());

        workshop.set_status(GroupStatus::Closed);
        assert!(workshop.is_closed());
    }
}
