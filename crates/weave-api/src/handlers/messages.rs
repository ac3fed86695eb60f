//! Chat message handlers
//!
//! Endpoints for the workshop chat relay. The service layer re-checks
//! membership on every call.

use axum::{
    extract::{Path, State},
    Json,
};
use weave_service::{ChatService, MessageResponse, SendMessageRequest};

use crate::extractors::{AuthUser, Page, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Get workshop messages, oldest first
///
/// GET /workshops/{workshop_id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workshop_id): Path<String>,
    page: Page,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let workshop_id = workshop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid workshop_id format"))?;

    let service = ChatService::new(state.service_context());
    let messages = service
        .list_messages(workshop_id, auth.user_id, Some(page.limit))
        .await?;
    Ok(Json(messages))
}

/// Send a chat message
///
/// POST /workshops/{workshop_id}/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(workshop_id): Path<String>,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let workshop_id = workshop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid workshop_id format"))?;

    let service = ChatService::new(state.service_context());
    let response = service
        .send_message(workshop_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Delete a message (sender or workshop creator)
///
/// DELETE /workshops/{workshop_id}/messages/{message_id}
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((workshop_id, message_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let workshop_id = workshop_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid workshop_id format"))?;
    let message_id = message_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid message_id format"))?;

    let service = ChatService::new(state.service_context());
    service
        .delete_message(workshop_id, message_id, auth.user_id)
        .await?;
    Ok(NoContent)
}
