//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Notification not found: {0}")]
    NotificationNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown reaction kind: {0}")]
    UnknownReactionKind(String),

    #[error("Unknown vote direction: {0}")]
    UnknownVoteDirection(String),

    #[error("Rating out of range: {0} (expected 1-5)")]
    RatingOutOfRange(i16),

    #[error("Comment content is empty")]
    EmptyContent,

    #[error("Cannot subscribe to yourself")]
    SelfSubscription,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Staff privileges required")]
    StaffOnly,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Post already reviewed by this user")]
    AlreadyReviewed,

    #[error("Already subscribed to this author")]
    AlreadySubscribed,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnknownReactionKind(_) => "UNKNOWN_REACTION_KIND",
            Self::UnknownVoteDirection(_) => "UNKNOWN_VOTE_DIRECTION",
            Self::RatingOutOfRange(_) => "RATING_OUT_OF_RANGE",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::SelfSubscription => "SELF_SUBSCRIPTION",

            // Authorization
            Self::StaffOnly => "STAFF_ONLY",

            // Conflict
            Self::AlreadyReviewed => "ALREADY_REVIEWED",
            Self::AlreadySubscribed => "ALREADY_SUBSCRIBED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::UserNotFound(_)
                | Self::NotificationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::UnknownReactionKind(_)
                | Self::UnknownVoteDirection(_)
                | Self::RatingOutOfRange(_)
                | Self::EmptyContent
                | Self::SelfSubscription
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::StaffOnly)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyReviewed | Self::AlreadySubscribed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::PostNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_POST");

        let err = DomainError::UnknownReactionKind("grr".to_string());
        assert_eq!(err.code(), "UNKNOWN_REACTION_KIND");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::PostNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::CommentNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::AlreadyReviewed.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::StaffOnly.is_authorization());
        assert!(!DomainError::EmptyContent.is_authorization());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::PostNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Post not found: 123");

        let err = DomainError::RatingOutOfRange(9);
        assert_eq!(err.to_string(), "Rating out of range: 9 (expected 1-5)");
    }
}
