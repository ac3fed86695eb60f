//! Community statistics handlers

use axum::{extract::State, Json};
use weave_service::{CommunityStatsResponse, StatsService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Get community totals and recent activity (no auth required)
///
/// GET /stats
pub async fn community_stats(
    State(state): State<AppState>,
) -> ApiResult<Json<CommunityStatsResponse>> {
    let service = StatsService::new(state.service_context());
    let response = service.community_stats().await?;
    Ok(Json(response))
}
