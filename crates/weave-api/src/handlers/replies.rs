//! Thread reply handlers
//!
//! Endpoints for posting, editing, and deleting thread replies.

use axum::{
    extract::{Path, State},
    Json,
};
use weave_service::{CreateReplyRequest, ReplyResponse, ThreadService, UpdateReplyRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Get a thread's replies, oldest first
///
/// GET /threads/{thread_id}/replies
pub async fn list_replies(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<Vec<ReplyResponse>>> {
    let thread_id = thread_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid thread_id format"))?;

    let service = ThreadService::new(state.service_context());
    let replies = service.list_replies(thread_id).await?;
    Ok(Json(replies))
}

/// Reply to a thread
///
/// POST /threads/{thread_id}/replies
pub async fn create_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateReplyRequest>,
) -> ApiResult<Created<Json<ReplyResponse>>> {
    let thread_id = thread_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid thread_id format"))?;

    let service = ThreadService::new(state.service_context());
    let response = service
        .create_reply(thread_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Edit a reply (author only, within the edit window)
///
/// PATCH /replies/{reply_id}
pub async fn update_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(reply_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateReplyRequest>,
) -> ApiResult<Json<ReplyResponse>> {
    let reply_id = reply_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid reply_id format"))?;

    let service = ThreadService::new(state.service_context());
    let response = service
        .update_reply(reply_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a reply (reply author or thread author)
///
/// DELETE /replies/{reply_id}
pub async fn delete_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(reply_id): Path<String>,
) -> ApiResult<NoContent> {
    let reply_id = reply_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid reply_id format"))?;

    let service = ThreadService::new(state.service_context());
    service.delete_reply(reply_id, auth.user_id).await?;
    Ok(NoContent)
}
