//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use blog_core::entities::User;
use blog_core::value_objects::Snowflake;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            is_staff: model.is_staff,
            created_at: model.created_at,
        }
    }
}
