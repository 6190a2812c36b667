//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Toggle a reaction on a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ToggleReactionRequest {
    /// Reaction kind name ("like", "love", "haha", "wow")
    #[validate(length(min = 1, max = 16, message = "Reaction kind must be 1-16 characters"))]
    pub kind: String,
}

/// Toggle a vote on a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ToggleVoteRequest {
    /// Vote direction ("up" or "down")
    #[validate(length(min = 1, max = 8, message = "Vote direction must be 1-8 characters"))]
    pub direction: String,
}

/// Add a comment to a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, max = 4000, message = "Comment must be 1-4000 characters"))]
    pub content: String,
}

/// Add a review to a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,

    #[validate(length(max = 2000, message = "Review comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}
