//! Post entity - a published or draft article

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub slug: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new draft Post
    pub fn new(id: Snowflake, author_id: Snowflake, title: String, slug: String) -> Self {
        Self {
            id,
            author_id,
            title,
            slug,
            published: false,
            created_at: Utc::now(),
            published_at: None,
        }
    }

    /// Mark the post as published, stamping the publication time
    pub fn publish(&mut self) {
        self.published = true;
        self.published_at = Some(Utc::now());
    }

    /// Check whether the post is visible to readers
    #[inline]
    pub fn is_published(&self) -> bool {
        self.published
    }
}
