//! Community statistics service

use chrono::{Duration, Utc};
use tracing::instrument;

use crate::dto::CommunityStatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Window for the recent-activity counters
const RECENT_WINDOW_DAYS: i64 = 7;

/// Community statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Aggregate community totals and a recent-activity window
    #[instrument(skip(self))]
    pub async fn community_stats(&self) -> ServiceResult<CommunityStatsResponse> {
        let since = Utc::now() - Duration::days(RECENT_WINDOW_DAYS);

        let total_writers = self.ctx.profile_repo().count().await?;
        let total_workshops = self.ctx.workshop_repo().count().await?;
        let total_clubs = self.ctx.club_repo().count().await?;
        let total_threads = self.ctx.thread_repo().count().await?;
        let total_messages = self.ctx.message_repo().count().await?;
        let threads_last_7d = self.ctx.thread_repo().count_since(since).await?;
        let messages_last_7d = self.ctx.message_repo().count_since(since).await?;

        Ok(CommunityStatsResponse {
            total_writers,
            total_workshops,
            total_clubs,
            total_threads,
            total_messages,
            threads_last_7d,
            messages_last_7d,
        })
    }
}

#[cfg(test)]
mod tests {
    // Covered end to end in tests/integration
}
