//! # weave-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, ChatService, ClubService, ProfileService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, StatsService, ThreadService, WorkshopService,
};

pub use dto::{
    AuthResponse, ClubJoinResponse, ClubLeaveResponse, ClubResponse, CommunityStatsResponse,
    CreateClubRequest, CreateInviteRequest, CreateReplyRequest, CreateThreadRequest,
    CreateWorkshopRequest, CurrentProfileResponse, HealthResponse, InviteResponse,
    JoinClubRequest, LockThreadRequest, LoginRequest, LogoutRequest, MemberResponse,
    MessageResponse, ProfileWithStatsResponse, PublicProfileResponse, ReadinessResponse,
    RefreshTokenRequest, RegisterRequest, ReplyResponse, SendMessageRequest, ThreadResponse,
    UpdateClubRequest, UpdateProfileRequest, UpdateReplyRequest, UpdateWorkshopRequest,
    WorkshopDetailResponse, WorkshopJoinResponse, WorkshopLeaveResponse, WorkshopResponse,
};
