//! Review database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use blog_core::entities::Review;
use blog_core::value_objects::Snowflake;

/// Database model for reviews table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub post_id: i64,
    pub user_id: i64,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Self {
            post_id: Snowflake::new(model.post_id),
            user_id: Snowflake::new(model.user_id),
            rating: model.rating,
            comment: model.comment,
            created_at: model.created_at,
        }
    }
}
