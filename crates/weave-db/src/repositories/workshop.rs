//! PostgreSQL implementation of WorkshopRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use weave_core::{MemberRole, RepoResult, Workshop, WorkshopRepository};

use crate::models::WorkshopModel;

use super::error::{map_db_error, workshop_not_found};

/// PostgreSQL implementation of WorkshopRepository
#[derive(Clone)]
pub struct PgWorkshopRepository {
    pool: PgPool,
}

impl PgWorkshopRepository {
    /// Create a new PgWorkshopRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkshopRepository for PgWorkshopRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Workshop>> {
        let result = sqlx::query_as::<_, WorkshopModel>(
            r"
            SELECT id, title, description, genre, creator_id, max_participants,
                   current_participants, status, last_activity_at, created_at, updated_at
            FROM workshops
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Workshop::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Workshop>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, WorkshopModel>(
            r"
            SELECT id, title, description, genre, creator_id, max_participants,
                   current_participants, status, last_activity_at, created_at, updated_at
            FROM workshops
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Workshop::from).collect())
    }

    /// The workshop row and the creator's membership land in one transaction
    /// so a workshop can never exist without its first participant.
    #[instrument(skip(self))]
    async fn create_with_creator(&self, workshop: &Workshop) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO workshops (id, title, description, genre, creator_id, max_participants,
                                   current_participants, status, last_activity_at, created_at,
                                   updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(workshop.id)
        .bind(&workshop.title)
        .bind(&workshop.description)
        .bind(&workshop.genre)
        .bind(workshop.creator_id)
        .bind(workshop.max_participants)
        .bind(workshop.current_participants)
        .bind(workshop.status.as_str())
        .bind(workshop.last_activity_at)
        .bind(workshop.created_at)
        .bind(workshop.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO workshop_members (workshop_id, user_id, role, joined_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(workshop.id)
        .bind(workshop.creator_id)
        .bind(MemberRole::Creator.as_str())
        .bind(workshop.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, workshop: &Workshop) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE workshops
            SET title = $2, description = $3, genre = $4, status = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(workshop.id)
        .bind(&workshop.title)
        .bind(&workshop.description)
        .bind(&workshop.genre)
        .bind(workshop.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(workshop_not_found(workshop.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn touch_activity(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE workshops
            SET last_activity_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(workshop_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn member_count(&self, id: Uuid) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM workshop_members WHERE workshop_id = $1
            ",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM workshops
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_by_creator(&self, creator_id: Uuid) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM workshops WHERE creator_id = $1
            ",
        )
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
