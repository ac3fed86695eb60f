//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("writer{suffix}"),
            email: format!("writer{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentProfileResponse,
}

/// Current profile response (includes email)
#[derive(Debug, Deserialize)]
pub struct CurrentProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: String,
}

/// Public profile response
#[derive(Debug, Deserialize)]
pub struct PublicProfileResponse {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: String,
}

/// Public profile with contribution counters
#[derive(Debug, Deserialize)]
pub struct ProfileWithStatsResponse {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub workshops_created: i64,
    pub clubs_created: i64,
    pub threads_started: i64,
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Create workshop request
#[derive(Debug, Serialize)]
pub struct CreateWorkshopRequest {
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub max_participants: Option<i32>,
}

impl CreateWorkshopRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Workshop {suffix}"),
            description: Some("A test workshop".to_string()),
            genre: Some("fiction".to_string()),
            max_participants: None,
        }
    }

    pub fn named(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            genre: None,
            max_participants: None,
        }
    }
}

/// Workshop response
#[derive(Debug, Deserialize)]
pub struct WorkshopResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub creator_id: String,
    pub status: String,
    pub max_participants: i32,
    pub current_participants: i32,
    pub created_at: String,
}

/// Workshop response with the creator's profile joined
#[derive(Debug, Deserialize)]
pub struct WorkshopDetailResponse {
    pub id: String,
    pub title: String,
    pub creator: PublicProfileResponse,
    pub status: String,
    pub current_participants: i32,
}

/// Join result with the membership and the updated counter
#[derive(Debug, Deserialize)]
pub struct WorkshopJoinResponse {
    pub member: MemberResponse,
    pub current_participants: i32,
}

/// Leave result with the updated counter
#[derive(Debug, Deserialize)]
pub struct WorkshopLeaveResponse {
    pub workshop_id: String,
    pub current_participants: i32,
}

/// Membership response (workshop or club)
#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub user: PublicProfileResponse,
    pub role: String,
    pub joined_at: String,
}

/// Send chat message request
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
}

impl SendMessageRequest {
    pub fn simple(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Chat message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub workshop_id: String,
    pub sender: PublicProfileResponse,
    pub content: String,
    pub created_at: String,
}

/// Create book club request
#[derive(Debug, Serialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub description: Option<String>,
    pub is_private: bool,
    pub max_members: Option<i32>,
    pub current_book_title: Option<String>,
}

impl CreateClubRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Club {suffix}"),
            description: Some("A test book club".to_string()),
            is_private: false,
            max_members: None,
            current_book_title: None,
        }
    }

    pub fn private() -> Self {
        let mut request = Self::unique();
        request.is_private = true;
        request
    }
}

/// Book club response
#[derive(Debug, Deserialize)]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    pub creator_id: String,
    pub current_book_title: Option<String>,
    pub is_private: bool,
    pub status: String,
    pub max_members: i32,
    pub current_member_count: i32,
}

/// Join club request (invite code for private clubs)
#[derive(Debug, Serialize, Default)]
pub struct JoinClubRequest {
    pub invite_code: Option<String>,
}

impl JoinClubRequest {
    pub fn with_code(code: &str) -> Self {
        Self {
            invite_code: Some(code.to_string()),
        }
    }
}

/// Join result with the membership and the updated counter
#[derive(Debug, Deserialize)]
pub struct ClubJoinResponse {
    pub member: MemberResponse,
    pub current_member_count: i32,
}

/// Leave result with the updated counter
#[derive(Debug, Deserialize)]
pub struct ClubLeaveResponse {
    pub club_id: String,
    pub current_member_count: i32,
}

/// Create club invite request
#[derive(Debug, Serialize, Default)]
pub struct CreateInviteRequest {
    pub max_uses: Option<i32>,
    pub expires_in_hours: Option<i64>,
}

/// Club invite response
#[derive(Debug, Deserialize)]
pub struct InviteResponse {
    pub code: String,
    pub club_id: String,
    pub inviter: PublicProfileResponse,
    pub uses: i32,
    pub max_uses: Option<i32>,
    pub expires_at: Option<String>,
}

/// Create discussion thread request
#[derive(Debug, Serialize)]
pub struct CreateThreadRequest {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
}

impl CreateThreadRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Thread {suffix}"),
            content: "What is everyone working on this week?".to_string(),
            category: Some("general".to_string()),
        }
    }
}

/// Discussion thread response
#[derive(Debug, Deserialize)]
pub struct ThreadResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: PublicProfileResponse,
    pub category: Option<String>,
    pub is_locked: bool,
    pub reply_count: i32,
}

/// Create thread reply request
#[derive(Debug, Serialize)]
pub struct CreateReplyRequest {
    pub content: String,
    pub parent_reply_id: Option<String>,
}

impl CreateReplyRequest {
    pub fn simple(content: &str) -> Self {
        Self {
            content: content.to_string(),
            parent_reply_id: None,
        }
    }
}

/// Thread reply response
#[derive(Debug, Deserialize)]
pub struct ReplyResponse {
    pub id: String,
    pub thread_id: String,
    pub author: PublicProfileResponse,
    pub parent_reply_id: Option<String>,
    pub content: String,
    pub is_edited: bool,
}

/// Community statistics response
#[derive(Debug, Deserialize)]
pub struct CommunityStatsResponse {
    pub total_writers: i64,
    pub total_workshops: i64,
    pub total_clubs: i64,
    pub total_threads: i64,
    pub total_messages: i64,
    pub threads_last_7d: i64,
    pub messages_last_7d: i64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
