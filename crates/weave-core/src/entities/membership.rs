//! Membership entities - the join relation between a user and a workshop/club

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a member holds inside a workshop or club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// The user who created the workshop/club
    Creator,
    /// A regular participant
    #[default]
    Member,
}

impl MemberRole {
    /// Database/text representation
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Creator => "creator",
            Self::Member => "member",
        }
    }

    /// Parse from the database representation (unknown values fall back to
    /// `Member`)
    pub fn parse(value: &str) -> Self {
        match value {
            "creator" => Self::Creator,
            _ => Self::Member,
        }
    }
}

/// A user's membership in a workshop (junction between Profile and Workshop)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopMember {
    pub workshop_id: Uuid,
    pub user_id: Uuid,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

impl WorkshopMember {
    /// Create a regular membership
    pub fn new(workshop_id: Uuid, user_id: Uuid) -> Self {
        Self {
            workshop_id,
            user_id,
            role: MemberRole::Member,
            joined_at: Utc::now(),
        }
    }

    /// Create the creator's membership (written alongside the workshop row)
    pub fn new_creator(workshop_id: Uuid, user_id: Uuid) -> Self {
        Self {
            workshop_id,
            user_id,
            role: MemberRole::Creator,
            joined_at: Utc::now(),
        }
    }

    /// Check if this member holds the creator role
    #[inline]
    pub fn is_creator(&self) -> bool {
        self.role == MemberRole::Creator
    }
}

/// A user's membership in a book club
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubMember {
    pub club_id: Uuid,
    pub user_id: Uuid,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

impl ClubMember {
    /// Create a regular membership
    pub fn new(club_id: Uuid, user_id: Uuid) -> Self {
        Self {
            club_id,
            user_id,
            role: MemberRole::Member,
            joined_at: Utc::now(),
        }
    }

    /// Create the creator's membership (written alongside the club row)
    pub fn new_creator(club_id: Uuid, user_id: Uuid) -> Self {
        Self {
            club_id,
            user_id,
            role: MemberRole::Creator,
            joined_at: Utc::now(),
        }
    }

    /// Check if this member holds the creator role
    #[inline]
    pub fn is_creator(&self) -> bool {
        self.role == MemberRole::Creator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(MemberRole::parse("creator"), MemberRole::Creator);
        assert_eq!(MemberRole::parse("member"), MemberRole::Member);
        assert_eq!(MemberRole::parse("moderator"), MemberRole::Member);
        assert_eq!(MemberRole::Creator.as_str(), "creator");
    }

    #[test]
    fn test_member_creation() {
        let workshop_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let member = WorkshopMember::new(workshop_id, user_id);
        assert_eq!(member.workshop_id, workshop_id);
        assert_eq!(member.user_id, user_id);
        assert!(!member.is_creator());
    }

    #[test]
    fn test_creator_membership() {
        let member = WorkshopMember::new_creator(Uuid::new_v4(), Uuid::new_v4());
        assert!(member.is_creator());

        let member = ClubMember::new_creator(Uuid::new_v4(), Uuid::new_v4());
        assert!(member.is_creator());
    }
}
