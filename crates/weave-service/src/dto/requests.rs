//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Update current profile request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Display name (empty string to remove)
    #[validate(length(max = 64, message = "Display name must be at most 64 characters"))]
    pub display_name: Option<String>,

    /// Avatar URL (empty string to remove)
    #[validate(length(max = 255, message = "Avatar URL must be at most 255 characters"))]
    pub avatar_url: Option<String>,

    /// Bio (empty string to remove)
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
}

// ============================================================================
// Workshop Requests
// ============================================================================

/// Create workshop request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkshopRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 50, message = "Genre must be at most 50 characters"))]
    pub genre: Option<String>,

    /// Participant cap (defaults to 10)
    #[validate(range(min = 2, max = 100, message = "Participant cap must be 2-100"))]
    pub max_participants: Option<i32>,
}

/// Update workshop request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWorkshopRequest {
    /// Description (empty string to remove)
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Status: recruiting, active, closed
    pub status: Option<String>,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Send chat message request
///
/// Content rules (trimming, emptiness, length) are enforced by the chat
/// service so that whitespace-only input is rejected consistently.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub message: String,
}

// ============================================================================
// Club Requests
// ============================================================================

/// Create book club request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClubRequest {
    #[validate(length(min = 1, max = 100, message = "Club name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Private clubs require an invite code to join
    #[serde(default)]
    pub is_private: bool,

    /// Member cap (defaults to 20)
    #[validate(range(min = 2, max = 200, message = "Member cap must be 2-200"))]
    pub max_members: Option<i32>,

    #[validate(length(max = 200, message = "Book title must be at most 200 characters"))]
    pub current_book_title: Option<String>,
}

/// Update book club request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateClubRequest {
    /// Description (empty string to remove)
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Current book (empty string to remove)
    #[validate(length(max = 200, message = "Book title must be at most 200 characters"))]
    pub current_book_title: Option<String>,
}

/// Join club request (invite code required for private clubs)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JoinClubRequest {
    pub invite_code: Option<String>,
}

/// Create club invite request
#[derive(Debug, Clone, Deserialize, Default, Validate)]
pub struct CreateInviteRequest {
    /// Max number of uses (unlimited when omitted)
    #[validate(range(min = 1, max = 100, message = "Max uses must be 1-100"))]
    pub max_uses: Option<i32>,

    /// Expiry in hours from now (never expires when omitted)
    #[validate(range(min = 1, max = 720, message = "Expiry must be 1-720 hours"))]
    pub expires_in_hours: Option<i64>,
}

// ============================================================================
// Thread Requests
// ============================================================================

/// Create discussion thread request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThreadRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: Option<String>,
}

/// Lock or unlock a thread request
#[derive(Debug, Clone, Deserialize)]
pub struct LockThreadRequest {
    pub locked: bool,
}

/// Create thread reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,

    /// Reply being responded to, for nested replies
    pub parent_reply_id: Option<Uuid>,
}

/// Update thread reply request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReplyRequest {
    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_request_validation() {
        // Valid request
        let valid = RegisterRequest {
            username: "inkwell".to_string(),
            email: "ink@example.com".to_string(),
            password: "securepassword123".to_string(),
        };
        assert!(valid.validate().is_ok());

        // Invalid - username too short
        let short_username = RegisterRequest {
            username: "ab".to_string(),
            email: "ink@example.com".to_string(),
            password: "securepassword123".to_string(),
        };
        assert!(short_username.validate().is_err());

        // Invalid - bad email
        let bad_email = RegisterRequest {
            username: "inkwell".to_string(),
            email: "not-an-email".to_string(),
            password: "securepassword123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        // Invalid - password too short
        let short_password = RegisterRequest {
            username: "inkwell".to_string(),
            email: "ink@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_create_workshop_validation() {
        let valid = CreateWorkshopRequest {
            title: "Flash Fiction Friday".to_string(),
            description: Some("Weekly 500-word sprints".to_string()),
            genre: Some("flash".to_string()),
            max_participants: Some(12),
        };
        assert!(valid.validate().is_ok());

        let empty_title = CreateWorkshopRequest {
            title: "".to_string(),
            description: None,
            genre: None,
            max_participants: None,
        };
        assert!(empty_title.validate().is_err());

        let cap_too_small = CreateWorkshopRequest {
            title: "Poetry Circle".to_string(),
            description: None,
            genre: None,
            max_participants: Some(1),
        };
        assert!(cap_too_small.validate().is_err());
    }

    #[test]
    fn test_send_message_has_no_field_rules() {
        // Whitespace handling lives in the chat service, not the DTO
        let raw = SendMessageRequest {
            message: "   ".to_string(),
        };
        assert!(raw.validate().is_ok());
    }

    #[test]
    fn test_create_invite_validation() {
        let valid = CreateInviteRequest {
            max_uses: Some(5),
            expires_in_hours: Some(24),
        };
        assert!(valid.validate().is_ok());

        let unlimited = CreateInviteRequest::default();
        assert!(unlimited.validate().is_ok());

        let zero_uses = CreateInviteRequest {
            max_uses: Some(0),
            expires_in_hours: None,
        };
        assert!(zero_uses.validate().is_err());
    }

    #[test]
    fn test_create_thread_validation() {
        let valid = CreateThreadRequest {
            title: "Favorite opening lines?".to_string(),
            content: "Share the first sentence that hooked you.".to_string(),
            category: Some("craft".to_string()),
        };
        assert!(valid.validate().is_ok());

        let empty_content = CreateThreadRequest {
            title: "Empty".to_string(),
            content: "".to_string(),
            category: None,
        };
        assert!(empty_content.validate().is_err());
    }
}
