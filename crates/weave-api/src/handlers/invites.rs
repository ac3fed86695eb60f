//! Invite handlers
//!
//! Endpoints for club invite management. Redemption happens inside the
//! club join, not here.

use axum::{
    extract::{Path, State},
    Json,
};
use weave_service::{ClubService, CreateInviteRequest, InviteResponse};

use crate::extractors::{AuthUser, OptionalValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Get a club's invites (creator only)
///
/// GET /clubs/{club_id}/invites
pub async fn list_invites(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(club_id): Path<String>,
) -> ApiResult<Json<Vec<InviteResponse>>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = ClubService::new(state.service_context());
    let invites = service.list_invites(club_id, auth.user_id).await?;
    Ok(Json(invites))
}

/// Create a club invite (creator only)
///
/// POST /clubs/{club_id}/invites
pub async fn create_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(club_id): Path<String>,
    OptionalValidatedJson(body): OptionalValidatedJson<CreateInviteRequest>,
) -> ApiResult<Created<Json<InviteResponse>>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    // Use default values if no body provided
    let request = body.unwrap_or_default();

    let service = ClubService::new(state.service_context());
    let response = service
        .create_invite(club_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}
