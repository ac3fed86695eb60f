//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentProfileResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentProfileResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

/// Current authenticated profile response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public profile response (for viewing other writers)
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfileResponse {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Workshop Responses
// ============================================================================

/// Workshop response
#[derive(Debug, Clone, Serialize)]
pub struct WorkshopResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub creator_id: Uuid,
    pub status: String,
    pub max_participants: i32,
    pub current_participants: i32,
    pub last_activity_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Workshop response with the creator's profile joined
#[derive(Debug, Clone, Serialize)]
pub struct WorkshopDetailResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub creator: PublicProfileResponse,
    pub status: String,
    pub max_participants: i32,
    pub current_participants: i32,
    pub last_activity_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Join result with the membership and the updated counter
#[derive(Debug, Serialize)]
pub struct WorkshopJoinResponse {
    pub member: MemberResponse,
    pub current_participants: i32,
}

/// Leave result with the updated counter
#[derive(Debug, Serialize)]
pub struct WorkshopLeaveResponse {
    pub workshop_id: Uuid,
    pub current_participants: i32,
}

// ============================================================================
// Member Responses
// ============================================================================

/// Membership response (workshop or club)
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub user: PublicProfileResponse,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Chat message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub workshop_id: Uuid,
    pub sender: PublicProfileResponse,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Club Responses
// ============================================================================

/// Book club response
#[derive(Debug, Clone, Serialize)]
pub struct ClubResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub creator_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_book_title: Option<String>,
    pub is_private: bool,
    pub status: String,
    pub max_members: i32,
    pub current_member_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Join result with the membership and the updated counter
#[derive(Debug, Serialize)]
pub struct ClubJoinResponse {
    pub member: MemberResponse,
    pub current_member_count: i32,
}

/// Leave result with the updated counter
#[derive(Debug, Serialize)]
pub struct ClubLeaveResponse {
    pub club_id: Uuid,
    pub current_member_count: i32,
}

// ============================================================================
// Invite Responses
// ============================================================================

/// Club invite response
#[derive(Debug, Clone, Serialize)]
pub struct InviteResponse {
    pub code: String,
    pub club_id: Uuid,
    pub inviter: PublicProfileResponse,
    pub uses: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_uses: Option<i32>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Thread Responses
// ============================================================================

/// Discussion thread response
#[derive(Debug, Clone, Serialize)]
pub struct ThreadResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: PublicProfileResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_locked: bool,
    pub reply_count: i32,
    pub last_activity_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Thread reply response
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author: PublicProfileResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_reply_id: Option<Uuid>,
    pub content: String,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Stats Responses
// ============================================================================

/// Community-wide activity counters
#[derive(Debug, Clone, Serialize)]
pub struct CommunityStatsResponse {
    pub total_writers: i64,
    pub total_workshops: i64,
    pub total_clubs: i64,
    pub total_threads: i64,
    pub total_messages: i64,
    pub threads_last_7d: i64,
    pub messages_last_7d: i64,
}

/// Public profile with contribution counters
#[derive(Debug, Clone, Serialize)]
pub struct ProfileWithStatsResponse {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub workshops_created: i64,
    pub clubs_created: i64,
    pub threads_started: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
