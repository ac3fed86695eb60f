//! Workshop database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for workshops table
///
/// `status` is stored as TEXT; parsing into the domain enum happens in the
/// mapper.
#[derive(Debug, Clone, FromRow)]
pub struct WorkshopModel {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub creator_id: Uuid,
    pub max_participants: i32,
    pub current_participants: i32,
    pub status: String,
    pub last_activity_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
