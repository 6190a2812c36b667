//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{Reaction, ReactionKind};
use blog_core::traits::{ReactionRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::{ReactionCountModel, ReactionModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT post_id, user_id, kind, created_at
            FROM reactions
            WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn try_create(&self, reaction: &Reaction) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO reactions (post_id, user_id, kind, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
        )
        .bind(reaction.post_id.into_inner())
        .bind(reaction.user_id.into_inner())
        .bind(reaction.kind.as_str())
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn update_kind(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE reactions SET kind = $3 WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM reactions WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_kind(&self, post_id: Snowflake) -> RepoResult<Vec<(ReactionKind, i64)>> {
        let results = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT kind, COUNT(*) as count
            FROM reactions
            WHERE post_id = $1
            GROUP BY kind
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(|r| Ok((r.kind.parse::<ReactionKind>()?, r.count)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReactionRepository>();
    }
}
