//! PostgreSQL implementation of WorkshopMemberRepository
//!
//! `join` and `leave` pair the membership write with the workshop's
//! denormalized `current_participants` column in a single transaction. The
//! (workshop_id, user_id) primary key turns a concurrent double-join into a
//! unique violation, which surfaces as `AlreadyMember`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use weave_core::{DomainError, Profile, RepoResult, WorkshopMember, WorkshopMemberRepository};

use crate::mappers::workshop_member_with_profile;
use crate::models::{WorkshopMemberModel, WorkshopMemberWithProfileModel};

use super::error::{map_db_error, map_unique_violation, membership_not_found, workshop_not_found};

/// PostgreSQL implementation of WorkshopMemberRepository
#[derive(Clone)]
pub struct PgWorkshopMemberRepository {
    pool: PgPool,
}

impl PgWorkshopMemberRepository {
    /// Create a new PgWorkshopMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkshopMemberRepository for PgWorkshopMemberRepository {
    #[instrument(skip(self))]
    async fn find(&self, workshop_id: Uuid, user_id: Uuid) -> RepoResult<Option<WorkshopMember>> {
        let result = sqlx::query_as::<_, WorkshopMemberModel>(
            r"
            SELECT workshop_id, user_id, role, joined_at
            FROM workshop_members
            WHERE workshop_id = $1 AND user_id = $2
            ",
        )
        .bind(workshop_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(WorkshopMember::from))
    }

    #[instrument(skip(self))]
    async fn find_by_workshop(
        &self,
        workshop_id: Uuid,
    ) -> RepoResult<Vec<(WorkshopMember, Profile)>> {
        let results = sqlx::query_as::<_, WorkshopMemberWithProfileModel>(
            r"
            SELECT wm.workshop_id, wm.user_id, wm.role, wm.joined_at,
                   p.username, p.email, p.display_name, p.avatar_url, p.bio,
                   p.created_at AS profile_created_at, p.updated_at AS profile_updated_at
            FROM workshop_members wm
            JOIN profiles p ON p.id = wm.user_id
            WHERE wm.workshop_id = $1
            ORDER BY wm.joined_at
            ",
        )
        .bind(workshop_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(workshop_member_with_profile)
            .collect())
    }

    #[instrument(skip(self))]
    async fn is_member(&self, workshop_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM workshop_members WHERE workshop_id = $1 AND user_id = $2)
            ",
        )
        .bind(workshop_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn join(&self, member: &WorkshopMember) -> RepoResult<i32> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO workshop_members (workshop_id, user_id, role, joined_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(member.workshop_id)
        .bind(member.user_id)
        .bind(member.role.as_str())
        .bind(member.joined_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        let count = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE workshops
            SET current_participants = current_participants + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING current_participants
            ",
        )
        .bind(member.workshop_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| workshop_not_found(member.workshop_id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn leave(&self, workshop_id: Uuid, user_id: Uuid) -> RepoResult<i32> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM workshop_members WHERE workshop_id = $1 AND user_id = $2
            ",
        )
        .bind(workshop_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Dropping the transaction rolls it back
        if result.rows_affected() == 0 {
            return Err(membership_not_found());
        }

        let count = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE workshops
            SET current_participants = GREATEST(current_participants - 1, 0), updated_at = NOW()
            WHERE id = $1
            RETURNING current_participants
            ",
        )
        .bind(workshop_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| workshop_not_found(workshop_id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(count)
    }
}
