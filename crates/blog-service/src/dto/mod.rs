//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{AddCommentRequest, AddReviewRequest, ToggleReactionRequest, ToggleVoteRequest};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, CommentResponse, EngagementResponse, HealthChecks, HealthResponse,
    NotificationListResponse, NotificationResponse, ReadinessResponse, ReviewResponse,
    SubscriptionResponse, ToggleReactionResponse, ToggleVoteResponse,
};
