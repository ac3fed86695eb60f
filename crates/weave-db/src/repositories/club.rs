//! PostgreSQL implementation of ClubRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use weave_core::{BookClub, ClubRepository, MemberRole, RepoResult};

use crate::models::ClubModel;

use super::error::{club_not_found, map_db_error};

/// PostgreSQL implementation of ClubRepository
#[derive(Clone)]
pub struct PgClubRepository {
    pool: PgPool,
}

impl PgClubRepository {
    /// Create a new PgClubRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for PgClubRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<BookClub>> {
        let result = sqlx::query_as::<_, ClubModel>(
            r"
            SELECT id, name, description, creator_id, current_book_title, is_private,
                   max_members, current_member_count, status, created_at, updated_at
            FROM book_clubs
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(BookClub::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<BookClub>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, ClubModel>(
            r"
            SELECT id, name, description, creator_id, current_book_title, is_private,
                   max_members, current_member_count, status, created_at, updated_at
            FROM book_clubs
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(limit)
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(BookClub::from).collect())
    }

    /// The club row and the creator's membership land in one transaction so a
    /// club can never exist without its first member.
    #[instrument(skip(self))]
    async fn create_with_creator(&self, club: &BookClub) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO book_clubs (id, name, description, creator_id, current_book_title,
                                    is_private, max_members, current_member_count, status,
                                    created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(club.id)
        .bind(&club.name)
        .bind(&club.description)
        .bind(club.creator_id)
        .bind(&club.current_book_title)
        .bind(club.is_private)
        .bind(club.max_members)
        .bind(club.current_member_count)
        .bind(club.status.as_str())
        .bind(club.created_at)
        .bind(club.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO club_members (club_id, user_id, role, joined_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(club.id)
        .bind(club.creator_id)
        .bind(MemberRole::Creator.as_str())
        .bind(club.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, club: &BookClub) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE book_clubs
            SET name = $2, description = $3, current_book_title = $4, status = $5,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(club.id)
        .bind(&club.name)
        .bind(&club.description)
        .bind(&club.current_book_title)
        .bind(club.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(club_not_found(club.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn member_count(&self, id: Uuid) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM club_members WHERE club_id = $1
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
            SELECT COUNT(*) FROM book_clubs
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
            SELECT COUNT(*) FROM book_clubs WHERE creator_id = $1
            ",
        )
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
