//! Workshop handlers
//!
//! Endpoints for writing workshop management.

use axum::{
    extract::{Path, State},
    Json,
};
use weave_service::{
    CreateWorkshopRequest, UpdateWorkshopRequest, WorkshopDetailResponse, WorkshopResponse,
    WorkshopService,
};

use crate::extractors::{AuthUser, Page, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create a new workshop
///
/// POST /workshops
pub async fn create_workshop(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateWorkshopRequest>,
) -> ApiResult<Created<Json<WorkshopResponse>>> {
    let service = WorkshopService::new(state.service_context());
    let response = service.create_workshop(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List workshops, newest first
///
/// GET /workshops
pub async fn list_workshops(
    State(state): State<AppState>,
    _auth: AuthUser,
    page: Page,
) -> ApiResult<Json<Vec<WorkshopResponse>>> {
    let service = WorkshopService::new(state.service_context());
    let workshops = service.list_workshops(page.limit, page.offset).await?;
    Ok(Json(workshops))
}

/// Get workshop by ID
///
/// GET /workshops/{workshop_id}
pub async fn get_workshop(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(workshop_id): Path<String>,
) -> ApiResult<Json<WorkshopDetailResponse>> {
    let workshop_id = workshop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid workshop_id format"))?;

    let service = WorkshopService::new(state.service_context());
    let response = service.get_workshop(workshop_id).await?;
    Ok(Json(response))
}

/// Update workshop settings
///
/// PATCH /workshops/{workshop_id}
pub async fn update_workshop(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workshop_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateWorkshopRequest>,
) -> ApiResult<Json<WorkshopResponse>> {
    let workshop_id = workshop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid workshop_id format"))?;

    let service = WorkshopService::new(state.service_context());
    let response = service
        .update_workshop(workshop_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}
