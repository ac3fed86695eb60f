//! Membership handlers
//!
//! Endpoints for joining, leaving, and listing workshop and club members.
//! Leave responses carry the updated participant count so clients can
//! render it without a second fetch.

use axum::{
    extract::{Path, State},
    Json,
};
use weave_service::{
    ClubJoinResponse, ClubLeaveResponse, ClubService, JoinClubRequest, MemberResponse,
    WorkshopJoinResponse, WorkshopLeaveResponse, WorkshopService,
};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Join a workshop
///
/// POST /workshops/{workshop_id}/members
pub async fn join_workshop(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workshop_id): Path<String>,
) -> ApiResult<Created<Json<WorkshopJoinResponse>>> {
    let workshop_id = workshop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid workshop_id format"))?;

    let service = WorkshopService::new(state.service_context());
    let response = service.join_workshop(workshop_id, auth.user_id).await?;
    Ok(Created(Json(response)))
}

/// Leave a workshop, or remove a member as the creator
///
/// DELETE /workshops/{workshop_id}/members/{user_id}
pub async fn leave_workshop(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((workshop_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<WorkshopLeaveResponse>> {
    let workshop_id = workshop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid workshop_id format"))?;
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = WorkshopService::new(state.service_context());
    let response = service
        .leave_workshop(workshop_id, user_id, auth.user_id)
        .await?;
    Ok(Json(response))
}

/// Get workshop members
///
/// GET /workshops/{workshop_id}/members
pub async fn list_workshop_members(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(workshop_id): Path<String>,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let workshop_id = workshop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid workshop_id format"))?;

    let service = WorkshopService::new(state.service_context());
    let members = service.list_members(workshop_id).await?;
    Ok(Json(members))
}

/// Join a book club
///
/// POST /clubs/{club_id}/members
pub async fn join_club(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(club_id): Path<String>,
    body: Option<Json<JoinClubRequest>>,
) -> ApiResult<Created<Json<ClubJoinResponse>>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    // Public clubs need no body at all
    let request = body.map(|j| j.0).unwrap_or_default();

    let service = ClubService::new(state.service_context());
    let response = service.join_club(club_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Leave a club, or remove a member as the creator
///
/// DELETE /clubs/{club_id}/members/{user_id}
pub async fn leave_club(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((club_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<ClubLeaveResponse>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = ClubService::new(state.service_context());
    let response = service.leave_club(club_id, user_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Get club members
///
/// GET /clubs/{club_id}/members
pub async fn list_club_members(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(club_id): Path<String>,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = ClubService::new(state.service_context());
    let members = service.list_members(club_id).await?;
    Ok(Json(members))
}
