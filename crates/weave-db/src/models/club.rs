//! Book club database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for book_clubs table
#[derive(Debug, Clone, FromRow)]
pub struct ClubModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: Uuid,
    pub current_book_title: Option<String>,
    pub is_private: bool,
    pub max_members: i32,
    pub current_member_count: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
