//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Review;
use blog_core::traits::{RepoResult, ReviewRepository};
use blog_core::value_objects::Snowflake;

use crate::models::ReviewModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r#"
            SELECT post_id, user_id, rating, comment, created_at
            FROM reviews
            WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self, review))]
    async fn try_create(&self, review: &Review) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO reviews (post_id, user_id, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
        )
        .bind(review.post_id.into_inner())
        .bind(review.user_id.into_inner())
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn average_rating(&self, post_id: Snowflake) -> RepoResult<Option<f64>> {
        // AVG over zero rows is NULL, which surfaces here as None
        let average = sqlx::query_scalar::<_, Option<f64>>(
            r#"
            SELECT AVG(rating)::DOUBLE PRECISION
            FROM reviews
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(average)
    }

    #[instrument(skip(self))]
    async fn count(&self, post_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reviews WHERE post_id = $1
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
