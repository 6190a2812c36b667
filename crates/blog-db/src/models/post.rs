//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use blog_core::entities::Post;
use blog_core::value_objects::Snowflake;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Self {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            slug: model.slug,
            published: model.published,
            created_at: model.created_at,
            published_at: model.published_at,
        }
    }
}
