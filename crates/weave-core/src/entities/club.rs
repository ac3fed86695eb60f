//! BookClub entity - a reading group with an optional privacy flag

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::status::GroupStatus;

/// Default member cap applied when the creator does not pick one
pub const DEFAULT_MAX_MEMBERS: i32 = 20;

/// Book club entity
///
/// Private clubs admit members only through an invite code issued by the
/// creator. `current_member_count` follows the same transactional-counter
/// rule as workshops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookClub {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: Uuid,
    pub current_book_title: Option<String>,
    pub is_private: bool,
    pub max_members: i32,
    pub current_member_count: i32,
    pub status: GroupStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookClub {
    /// Create a new BookClub; the creator is the first member
    pub fn new(id: Uuid, name: String, creator_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            creator_id,
            current_book_title: None,
            is_private: false,
            max_members: DEFAULT_MAX_MEMBERS,
            current_member_count: 1,
            status: GroupStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user created this club
    #[inline]
    pub fn is_creator(&self, user_id: Uuid) -> bool {
        self.creator_id == user_id
    }

    /// Update the book the club is currently reading
    pub fn set_current_book(&mut self, title: Option<String>) {
        self.current_book_title = title;
        self.updated_at = Utc::now();
    }

    /// Update the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_creation() {
        let creator = Uuid::new_v4();
        let club = BookClub::new(Uuid::new_v4(), "Slow Readers".to_string(), creator);
        assert_eq!(club.name, "Slow Readers");
        assert!(!club.is_private);
        assert_eq!(club.current_member_count, 1);
        assert_eq!(club.status, GroupStatus::Active);
        assert!(club.is_creator(creator));
    }

    #[test]
    fn test_set_current_book() {
        let mut club = BookClub::new(Uuid::new_v4(), "Test".to_string(), Uuid::new_v4());
        assert!(club.current_book_title.is_none());

        club.set_current_book(Some("Piranesi".to_string()));
        assert_eq!(club.current_book_title.as_deref(), Some("Piranesi"));
    }
}
