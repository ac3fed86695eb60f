//! PostgreSQL implementation of ReplyRepository
//!
//! Reply writes keep the parent thread's `reply_count` and
//! `last_activity_at` in step inside one transaction, mirroring the
//! membership counter contract.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use weave_core::{Profile, ReplyRepository, RepoResult, ThreadReply};

use crate::mappers::reply_with_author;
use crate::models::{ReplyModel, ReplyWithAuthorModel};

use super::error::{map_db_error, reply_not_found, thread_not_found};

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ThreadReply>> {
        let result = sqlx::query_as::<_, ReplyModel>(
            r"
            SELECT id, thread_id, author_id, parent_reply_id, content, is_edited,
                   created_at, updated_at
            FROM thread_replies
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ThreadReply::from))
    }

    #[instrument(skip(self))]
    async fn find_by_thread(&self, thread_id: Uuid) -> RepoResult<Vec<(ThreadReply, Profile)>> {
        let results = sqlx::query_as::<_, ReplyWithAuthorModel>(
            r"
            SELECT r.id, r.thread_id, r.author_id, r.parent_reply_id, r.content, r.is_edited,
                   r.created_at, r.updated_at,
                   p.username, p.email, p.display_name, p.avatar_url, p.bio,
                   p.created_at AS profile_created_at, p.updated_at AS profile_updated_at
            FROM thread_replies r
            JOIN profiles p ON p.id = r.author_id
            WHERE r.thread_id = $1
            ORDER BY r.created_at
            ",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(reply_with_author).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, reply: &ThreadReply) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO thread_replies (id, thread_id, author_id, parent_reply_id, content,
                                        is_edited, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(reply.id)
        .bind(reply.thread_id)
        .bind(reply.author_id)
        .bind(reply.parent_reply_id)
        .bind(&reply.content)
        .bind(reply.is_edited)
        .bind(reply.created_at)
        .bind(reply.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE discussion_threads
            SET reply_count = reply_count + 1, last_activity_at = NOW(), updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(reply.thread_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(thread_not_found(reply.thread_id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, reply: &ThreadReply) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE thread_replies
            SET content = $2, is_edited = TRUE, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(reply.id)
        .bind(&reply.content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(reply.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let thread_id = sqlx::query_scalar::<_, Uuid>(
            r"
            DELETE FROM thread_replies WHERE id = $1 RETURNING thread_id
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| reply_not_found(id))?;

        sqlx::query(
            r"
            UPDATE discussion_threads
            SET reply_count = GREATEST(reply_count - 1, 0), updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(thread_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReplyRepository>();
    }
}
