//! Discussion thread handlers
//!
//! Endpoints for thread management.

use axum::{
    extract::{Path, State},
    Json,
};
use weave_service::{
    CreateThreadRequest, LockThreadRequest, ThreadResponse, ThreadService,
};

use crate::extractors::{AuthUser, Page, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Start a new discussion thread
///
/// POST /threads
pub async fn create_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateThreadRequest>,
) -> ApiResult<Created<Json<ThreadResponse>>> {
    let service = ThreadService::new(state.service_context());
    let response = service.create_thread(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List threads, most recent activity first
///
/// GET /threads
pub async fn list_threads(
    State(state): State<AppState>,
    _auth: AuthUser,
    page: Page,
) -> ApiResult<Json<Vec<ThreadResponse>>> {
    let service = ThreadService::new(state.service_context());
    let threads = service.list_threads(page.limit, page.offset).await?;
    Ok(Json(threads))
}

/// Get thread by ID
///
/// GET /threads/{thread_id}
pub async fn get_thread(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<ThreadResponse>> {
    let thread_id = thread_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid thread_id format"))?;

    let service = ThreadService::new(state.service_context());
    let response = service.get_thread(thread_id).await?;
    Ok(Json(response))
}

/// Lock or unlock a thread (author only)
///
/// PATCH /threads/{thread_id}
pub async fn lock_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
    Json(request): Json<LockThreadRequest>,
) -> ApiResult<Json<ThreadResponse>> {
    let thread_id = thread_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid thread_id format"))?;

    let service = ThreadService::new(state.service_context());
    let response = service
        .lock_thread(thread_id, auth.user_id, request.locked)
        .await?;
    Ok(Json(response))
}
