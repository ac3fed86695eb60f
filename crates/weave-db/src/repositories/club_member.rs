//! PostgreSQL implementation of ClubMemberRepository
//!
//! Same transactional counter contract as workshop memberships: the
//! membership write and the club's `current_member_count` move together or
//! not at all.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use weave_core::{ClubMember, ClubMemberRepository, DomainError, Profile, RepoResult};

use crate::mappers::club_member_with_profile;
use crate::models::{ClubMemberModel, ClubMemberWithProfileModel};

use super::error::{club_not_found, map_db_error, map_unique_violation, membership_not_found};

/// PostgreSQL implementation of ClubMemberRepository
#[derive(Clone)]
pub struct PgClubMemberRepository {
    pool: PgPool,
}

impl PgClubMemberRepository {
    /// Create a new PgClubMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubMemberRepository for PgClubMemberRepository {
    #[instrument(skip(self))]
    async fn find(&self, club_id: Uuid, user_id: Uuid) -> RepoResult<Option<ClubMember>> {
        let result = sqlx::query_as::<_, ClubMemberModel>(
            r"
            SELECT club_id, user_id, role, joined_at
            FROM club_members
            WHERE club_id = $1 AND user_id = $2
            ",
        )
        .bind(club_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ClubMember::from))
    }

    #[instrument(skip(self))]
    async fn find_by_club(&self, club_id: Uuid) -> RepoResult<Vec<(ClubMember, Profile)>> {
        let results = sqlx::query_as::<_, ClubMemberWithProfileModel>(
            r"
            SELECT cm.club_id, cm.user_id, cm.role, cm.joined_at,
                   p.username, p.email, p.display_name, p.avatar_url, p.bio,
                   p.created_at AS profile_created_at, p.updated_at AS profile_updated_at
            FROM club_members cm
            JOIN profiles p ON p.id = cm.user_id
            WHERE cm.club_id = $1
            ORDER BY cm.joined_at
            ",
        )
        .bind(club_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(club_member_with_profile).collect())
    }

    #[instrument(skip(self))]
    async fn is_member(&self, club_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM club_members WHERE club_id = $1 AND user_id = $2)
            ",
        )
        .bind(club_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn join(&self, member: &ClubMember) -> RepoResult<i32> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO club_members (club_id, user_id, role, joined_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(member.club_id)
        .bind(member.user_id)
        .bind(member.role.as_str())
        .bind(member.joined_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        let count = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE book_clubs
            SET current_member_count = current_member_count + 1, updated_at = NOW()
            WHERE id = $1
            RETURNING current_member_count
            ",
        )
        .bind(member.club_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| club_not_found(member.club_id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn leave(&self, club_id: Uuid, user_id: Uuid) -> RepoResult<i32> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            DELETE FROM club_members WHERE club_id = $1 AND user_id = $2
            ",
        )
        .bind(club_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(membership_not_found());
        }

        let count = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE book_clubs
            SET current_member_count = GREATEST(current_member_count - 1, 0), updated_at = NOW()
            WHERE id = $1
            RETURNING current_member_count
            ",
        )
        .bind(club_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| club_not_found(club_id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(count)
    }
}
