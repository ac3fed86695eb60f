//! Profile handlers
//!
//! Endpoints for the caller's own profile and public writer profiles.

use axum::{
    extract::{Path, State},
    Json,
};
use weave_service::{
    CurrentProfileResponse, ProfileService, ProfileWithStatsResponse, UpdateProfileRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get current profile
///
/// GET /users/@me
pub async fn get_current_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.get_current_profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current profile
///
/// PATCH /users/@me
pub async fn update_current_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Get a public profile with contribution statistics
///
/// GET /users/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileWithStatsResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = ProfileService::new(state.service_context());
    let response = service.get_profile(user_id).await?;
    Ok(Json(response))
}
