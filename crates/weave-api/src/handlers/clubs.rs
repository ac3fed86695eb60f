//! Book club handlers
//!
//! Endpoints for book club management.

use axum::{
    extract::{Path, State},
    Json,
};
use weave_service::{ClubResponse, ClubService, CreateClubRequest, UpdateClubRequest};

use crate::extractors::{AuthUser, Page, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create a new book club
///
/// POST /clubs
pub async fn create_club(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateClubRequest>,
) -> ApiResult<Created<Json<ClubResponse>>> {
    let service = ClubService::new(state.service_context());
    let response = service.create_club(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List clubs, newest first
///
/// GET /clubs
pub async fn list_clubs(
    State(state): State<AppState>,
    _auth: AuthUser,
    page: Page,
) -> ApiResult<Json<Vec<ClubResponse>>> {
    let service = ClubService::new(state.service_context());
    let clubs = service.list_clubs(page.limit, page.offset).await?;
    Ok(Json(clubs))
}

/// Get club by ID
///
/// GET /clubs/{club_id}
pub async fn get_club(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(club_id): Path<String>,
) -> ApiResult<Json<ClubResponse>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = ClubService::new(state.service_context());
    let response = service.get_club(club_id).await?;
    Ok(Json(response))
}

/// Update club settings
///
/// PATCH /clubs/{club_id}
pub async fn update_club(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(club_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateClubRequest>,
) -> ApiResult<Json<ClubResponse>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = ClubService::new(state.service_context());
    let response = service.update_club(club_id, auth.user_id, request).await?;
    Ok(Json(response))
}
