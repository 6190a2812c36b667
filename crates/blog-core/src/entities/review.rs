//! Review entity - a 1-5 star rating with optional text

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Review entity; at most one per (post, user)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub post_id: Snowflake,
    pub user_id: Snowflake,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Valid rating bounds, inclusive
    pub const MIN_RATING: i16 = 1;
    pub const MAX_RATING: i16 = 5;

    /// Create a new Review after validating the rating
    pub fn new(
        post_id: Snowflake,
        user_id: Snowflake,
        rating: i16,
        comment: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_rating(rating)?;
        Ok(Self {
            post_id,
            user_id,
            rating,
            comment,
            created_at: Utc::now(),
        })
    }

    /// Check a rating is within [1, 5]
    pub fn validate_rating(rating: i16) -> Result<(), DomainError> {
        if (Self::MIN_RATING..=Self::MAX_RATING).contains(&rating) {
            Ok(())
        } else {
            Err(DomainError::RatingOutOfRange(rating))
        }
    }
}
