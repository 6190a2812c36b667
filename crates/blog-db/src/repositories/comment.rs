//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::{Comment, ScoredComment};
use blog_core::traits::{CommentRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::{CommentModel, ScoredCommentModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, post_id, author_id, content, created_at, active, is_approved, pinned
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_visible_scored(&self, post_id: Snowflake) -> RepoResult<Vec<ScoredComment>> {
        let results = sqlx::query_as::<_, ScoredCommentModel>(
            r#"
            SELECT c.id, c.post_id, c.author_id, c.content, c.created_at,
                   c.active, c.is_approved, c.pinned,
                   COUNT(v.comment_id) FILTER (WHERE v.value = 1) AS up_votes,
                   COUNT(v.comment_id) FILTER (WHERE v.value = -1) AS down_votes,
                   COALESCE(SUM(v.value), 0)::BIGINT AS total_score
            FROM comments c
            LEFT JOIN comment_votes v ON v.comment_id = c.id
            WHERE c.post_id = $1 AND c.active = TRUE AND c.is_approved = TRUE
            GROUP BY c.id
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ScoredComment::from).collect())
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, post_id, author_id, content, created_at,
                                  active, is_approved, pinned)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(comment.post_id.into_inner())
        .bind(comment.author_id.map(Snowflake::into_inner))
        .bind(&comment.content)
        .bind(comment.created_at)
        .bind(comment.active)
        .bind(comment.is_approved)
        .bind(comment.pinned)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_pinned(&self, id: Snowflake, pinned: bool) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE comments SET pinned = $2 WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(pinned)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_approved(&self, id: Snowflake, approved: bool) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE comments SET is_approved = $2 WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(approved)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE comments SET active = FALSE WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
