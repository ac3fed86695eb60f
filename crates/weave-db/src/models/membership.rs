//! Membership database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for workshop_members table
#[derive(Debug, Clone, FromRow)]
pub struct WorkshopMemberModel {
    pub workshop_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

/// Database model for club_members table
#[derive(Debug, Clone, FromRow)]
pub struct ClubMemberModel {
    pub club_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

/// Workshop membership row joined with the member's profile
///
/// Profile timestamps are aliased in the query (`p.created_at AS
/// profile_created_at`) to keep them apart from the membership's own columns.
#[derive(Debug, Clone, FromRow)]
pub struct WorkshopMemberWithProfileModel {
    pub workshop_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub joined_at: DateTime<Utc>,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub profile_created_at: DateTime<Utc>,
    pub profile_updated_at: DateTime<Utc>,
}

/// Club membership row joined with the member's profile
#[derive(Debug, Clone, FromRow)]
pub struct ClubMemberWithProfileModel {
    pub club_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub joined_at: DateTime<Utc>,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub profile_created_at: DateTime<Utc>,
    pub profile_updated_at: DateTime<Utc>,
}
