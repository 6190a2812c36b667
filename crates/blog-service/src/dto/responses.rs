//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use blog_core::entities::{Notification, ReactionCounts, Review, ScoredComment, ToggleAction};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Engagement Responses
// ============================================================================

/// Outcome of a reaction toggle
#[derive(Debug, Clone, Serialize)]
pub struct ToggleReactionResponse {
    /// What the toggle did: "added", "changed", or "removed"
    pub action: ToggleAction,
    /// The viewer's reaction after the toggle, absent when removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Fresh per-kind tallies; always carries all four kinds
    pub counts: ReactionCounts,
}

/// Outcome of a vote toggle
#[derive(Debug, Clone, Serialize)]
pub struct ToggleVoteResponse {
    /// The viewer's vote after the toggle: 1, 0, or -1
    pub current_value: i16,
    pub up_votes: i64,
    pub down_votes: i64,
    pub total_score: i64,
}

/// A comment with its vote aggregates and the viewer's own vote
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub pinned: bool,
    pub up_votes: i64,
    pub down_votes: i64,
    pub total_score: i64,
    /// The viewer's vote on this comment: 1, 0, or -1 (0 when anonymous)
    pub my_vote: i16,
}

impl CommentResponse {
    /// Build from a scored comment plus the viewer's vote value
    pub fn from_scored(scored: &ScoredComment, my_vote: i16) -> Self {
        Self {
            id: scored.comment.id.to_string(),
            post_id: scored.comment.post_id.to_string(),
            author_id: scored.comment.author_id.map(|id| id.to_string()),
            content: scored.comment.content.clone(),
            created_at: scored.comment.created_at,
            pinned: scored.comment.pinned,
            up_votes: scored.up_votes,
            down_votes: scored.down_votes,
            total_score: scored.total_score,
            my_vote,
        }
    }
}

/// The full engagement state of a post
#[derive(Debug, Clone, Serialize)]
pub struct EngagementResponse {
    pub post_id: String,
    /// Per-kind reaction tallies; always carries all four kinds
    pub reactions: ReactionCounts,
    pub reaction_total: i64,
    /// The viewer's reaction kind, absent when anonymous or not reacted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_reaction: Option<String>,
    /// Mean review rating; absent (not zero) when there are no reviews
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    pub review_count: i64,
    /// Whether the viewer already reviewed this post; false when anonymous
    /// or when the viewer authored the post
    pub has_reviewed: bool,
    /// Whether the viewer follows the post's author; false when anonymous
    /// or when the viewer authored the post
    pub is_subscribed_to_author: bool,
    /// Visible comments in display order
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Review Responses
// ============================================================================

/// A stored review
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub post_id: String,
    pub user_id: String,
    pub rating: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            post_id: review.post_id.to_string(),
            user_id: review.user_id.to_string(),
            rating: review.rating,
            comment: review.comment.clone(),
            created_at: review.created_at,
        }
    }
}

// ============================================================================
// Notification Responses
// ============================================================================

/// A single notification
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub origin_id: String,
    pub post_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            origin_id: notification.origin_id.to_string(),
            post_id: notification.post_id.to_string(),
            comment_id: notification.comment_id.map(|id| id.to_string()),
            message: notification.message.clone(),
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

/// Notification listing with the unread tally
#[derive(Debug, Clone, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationResponse>,
    pub unread_count: i64,
}

// ============================================================================
// Subscription Responses
// ============================================================================

/// Subscription state for an author
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub author_id: String,
    pub subscribed: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Per-dependency readiness checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
    pub redis: bool,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_omits_absent_rating() {
        let response = EngagementResponse {
            post_id: "1".to_string(),
            reactions: ReactionCounts::default(),
            reaction_total: 0,
            my_reaction: None,
            average_rating: None,
            review_count: 0,
            has_reviewed: false,
            is_subscribed_to_author: false,
            comments: Vec::new(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("average_rating").is_none());
        assert_eq!(json["reactions"]["haha"], 0);
    }
}
