//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{CommentVote, VoteValue};
use blog_core::error::DomainError;
use blog_core::traits::{RepoResult, VoteCounts, VoteRepository};
use blog_core::value_objects::Snowflake;

use crate::models::{CommentVoteModel, VoteCountModel};

use super::error::map_db_error;

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn get_or_create(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<CommentVote> {
        // Insert-if-absent, then read back; the unique constraint on
        // (comment_id, user_id) makes this race-safe.
        sqlx::query(
            r#"
            INSERT INTO comment_votes (comment_id, user_id, value)
            VALUES ($1, $2, 0)
            ON CONFLICT (comment_id, user_id) DO NOTHING
            "#,
        )
        .bind(comment_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let model = sqlx::query_as::<_, CommentVoteModel>(
            r#"
            SELECT comment_id, user_id, value
            FROM comment_votes
            WHERE comment_id = $1 AND user_id = $2
            "#,
        )
        .bind(comment_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| DomainError::DatabaseError("vote row vanished after insert".to_string()))?;

        CommentVote::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update_value(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        value: VoteValue,
    ) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE comment_votes SET value = $3 WHERE comment_id = $1 AND user_id = $2
            "#,
        )
        .bind(comment_id.into_inner())
        .bind(user_id.into_inner())
        .bind(value.as_i16())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn counts(&self, comment_id: Snowflake) -> RepoResult<VoteCounts> {
        let model = sqlx::query_as::<_, VoteCountModel>(
            r#"
            SELECT COUNT(*) FILTER (WHERE value = 1) AS up,
                   COUNT(*) FILTER (WHERE value = -1) AS down,
                   COALESCE(SUM(value), 0)::BIGINT AS total
            FROM comment_votes
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(VoteCounts::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_post_user(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Vec<CommentVote>> {
        let models = sqlx::query_as::<_, CommentVoteModel>(
            r#"
            SELECT v.comment_id, v.user_id, v.value
            FROM comment_votes v
            JOIN comments c ON c.id = v.comment_id
            WHERE c.post_id = $1 AND v.user_id = $2 AND v.value <> 0
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(CommentVote::try_from).collect()
    }
}
