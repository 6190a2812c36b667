//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use blog_core::entities::{Comment, ScoredComment};
use blog_core::value_objects::Snowflake;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub post_id: i64,
    pub author_id: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub active: bool,
    pub is_approved: bool,
    pub pinned: bool,
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Self {
            id: Snowflake::new(model.id),
            post_id: Snowflake::new(model.post_id),
            author_id: model.author_id.map(Snowflake::new),
            content: model.content,
            created_at: model.created_at,
            active: model.active,
            is_approved: model.is_approved,
            pinned: model.pinned,
        }
    }
}

/// Comment row joined with its vote aggregates
#[derive(Debug, Clone, FromRow)]
pub struct ScoredCommentModel {
    pub id: i64,
    pub post_id: i64,
    pub author_id: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub active: bool,
    pub is_approved: bool,
    pub pinned: bool,
    pub up_votes: i64,
    pub down_votes: i64,
    pub total_score: i64,
}

impl From<ScoredCommentModel> for ScoredComment {
    fn from(model: ScoredCommentModel) -> Self {
        Self {
            comment: Comment {
                id: Snowflake::new(model.id),
                post_id: Snowflake::new(model.post_id),
                author_id: model.author_id.map(Snowflake::new),
                content: model.content,
                created_at: model.created_at,
                active: model.active,
                is_approved: model.is_approved,
                pinned: model.pinned,
            },
            up_votes: model.up_votes,
            down_votes: model.down_votes,
            total_score: model.total_score,
        }
    }
}
