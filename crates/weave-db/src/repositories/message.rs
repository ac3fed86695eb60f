//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use weave_core::{ChatMessage, MessageRepository, Profile, RepoResult};

use crate::mappers::message_with_sender;
use crate::models::{MessageModel, MessageWithSenderModel};

use super::error::{map_db_error, message_not_found};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ChatMessage>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, workshop_id, sender_id, content, created_at
            FROM workshop_messages
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ChatMessage::from))
    }

    #[instrument(skip(self))]
    async fn find_by_workshop(
        &self,
        workshop_id: Uuid,
        limit: i64,
    ) -> RepoResult<Vec<(ChatMessage, Profile)>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, MessageWithSenderModel>(
            r"
            SELECT m.id, m.workshop_id, m.sender_id, m.content, m.created_at,
                   p.username, p.email, p.display_name, p.avatar_url, p.bio,
                   p.created_at AS profile_created_at, p.updated_at AS profile_updated_at
            FROM workshop_messages m
            JOIN profiles p ON p.id = m.sender_id
            WHERE m.workshop_id = $1
            ORDER BY m.created_at
            LIMIT $2
            ",
        )
        .bind(workshop_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(message_with_sender).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, message: &ChatMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO workshop_messages (id, workshop_id, sender_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(message.id)
        .bind(message.workshop_id)
        .bind(message.sender_id)
        .bind(&message.content)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM workshop_messages WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM workshop_messages
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
            SELECT COUNT(*) FROM workshop_messages WHERE created_at >= $1
            ",
        )
        .bind(since)
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
        assert_send_sync::<PgMessageRepository>();
    }
}
