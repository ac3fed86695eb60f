//! PostgreSQL implementation of ThreadRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use weave_core::{DiscussionThread, Profile, RepoResult, ThreadRepository};

use crate::mappers::thread_with_author;
use crate::models::{ThreadModel, ThreadWithAuthorModel};

use super::error::{map_db_error, thread_not_found};

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<DiscussionThread>> {
        let result = sqlx::query_as::<_, ThreadModel>(
            r"
            SELECT id, title, content, author_id, category, is_locked, reply_count,
                   last_activity_at, created_at, updated_at
            FROM discussion_threads
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DiscussionThread::from))
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<(DiscussionThread, Profile)>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, ThreadWithAuthorModel>(
            r"
            SELECT t.id, t.title, t.content, t.author_id, t.category, t.is_locked,
                   t.reply_count, t.last_activity_at, t.created_at, t.updated_at,
                   p.username, p.email, p.display_name, p.avatar_url, p.bio,
                   p.created_at AS profile_created_at, p.updated_at AS profile_updated_at
            FROM discussion_threads t
            JOIN profiles p ON p.id = t.author_id
            ORDER BY t.last_activity_at DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(thread_with_author).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, thread: &DiscussionThread) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO discussion_threads (id, title, content, author_id, category, is_locked,
                                            reply_count, last_activity_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(thread.id)
        .bind(&thread.title)
        .bind(&thread.content)
        .bind(thread.author_id)
        .bind(&thread.category)
        .bind(thread.is_locked)
        .bind(thread.reply_count)
        .bind(thread.last_activity_at)
        .bind(thread.created_at)
        .bind(thread.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_locked(&self, id: Uuid, locked: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE discussion_threads
            SET is_locked = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(locked)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM discussion_threads
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_since(&self, since: DateTime<Utc>) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM discussion_threads WHERE created_at >= $1
            ",
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, author_id: Uuid) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM discussion_threads WHERE author_id = $1
            ",
        )
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgThreadRepository>();
    }
}
