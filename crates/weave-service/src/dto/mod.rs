//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateClubRequest, CreateInviteRequest, CreateReplyRequest, CreateThreadRequest,
    CreateWorkshopRequest, JoinClubRequest, LockThreadRequest, LoginRequest, LogoutRequest,
    RefreshTokenRequest, RegisterRequest, SendMessageRequest, UpdateClubRequest,
    UpdateProfileRequest, UpdateReplyRequest, UpdateWorkshopRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, ClubJoinResponse, ClubLeaveResponse, ClubResponse, CommunityStatsResponse,
    CurrentProfileResponse, HealthChecks, HealthResponse, InviteResponse, MemberResponse,
    MessageResponse, ProfileWithStatsResponse, PublicProfileResponse, ReadinessResponse,
    ReplyResponse, ThreadResponse, WorkshopDetailResponse, WorkshopJoinResponse,
    WorkshopLeaveResponse, WorkshopResponse,
};

// Re-export mappers and helper structs
pub use mappers::{InviteWithInviter, ProfileWithStats};
