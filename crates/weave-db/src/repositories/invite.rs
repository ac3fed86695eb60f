//! PostgreSQL implementation of InviteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use weave_core::{ClubInvite, DomainError, InviteRepository, RepoResult};

use crate::models::InviteModel;

use super::error::{invite_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of InviteRepository
#[derive(Clone)]
pub struct PgInviteRepository {
    pool: PgPool,
}

impl PgInviteRepository {
    /// Create a new PgInviteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<ClubInvite>> {
        let result = sqlx::query_as::<_, InviteModel>(
            r"
            SELECT code, club_id, inviter_id, uses, max_uses, created_at, expires_at
            FROM club_invites
            WHERE code = $1
            ",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ClubInvite::from))
    }

    #[instrument(skip(self))]
    async fn find_by_club(&self, club_id: Uuid) -> RepoResult<Vec<ClubInvite>> {
        let results = sqlx::query_as::<_, InviteModel>(
            r"
            SELECT code, club_id, inviter_id, uses, max_uses, created_at, expires_at
            FROM club_invites
            WHERE club_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(club_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ClubInvite::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, invite: &ClubInvite) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO club_invites (code, club_id, inviter_id, uses, max_uses, created_at,
                                      expires_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&invite.code)
        .bind(invite.club_id)
        .bind(invite.inviter_id)
        .bind(invite.uses)
        .bind(invite.max_uses)
        .bind(invite.created_at)
        .bind(invite.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError("Invite code collision".to_string())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_uses(&self, code: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE club_invites
            SET uses = uses + 1
            WHERE code = $1
            ",
        )
        .bind(code)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(invite_not_found(code));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgInviteRepository>();
    }
}
