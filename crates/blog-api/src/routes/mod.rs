//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    comments, engagement, health, notifications, reactions, reviews, subscriptions,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(post_routes())
        .merge(comment_routes())
        .merge(notification_routes())
        .merge(subscription_routes())
}

/// Post-scoped engagement routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id/engagement", get(engagement::get_engagement))
        .route(
            "/posts/:post_id/reactions/toggle",
            post(reactions::toggle_reaction),
        )
        .route("/posts/:post_id/comments", post(comments::add_comment))
        .route("/posts/:post_id/reviews", post(reviews::add_review))
}

/// Comment-scoped routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments/:comment_id/votes/toggle",
            post(comments::toggle_vote),
        )
        .route("/comments/:comment_id/pin", post(comments::toggle_pin))
        .route(
            "/comments/:comment_id/approve",
            post(comments::approve_comment),
        )
        .route("/comments/:comment_id", delete(comments::reject_comment))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list_notifications))
        .route(
            "/notifications/:notification_id/read",
            post(notifications::mark_notification_read),
        )
}

/// Subscription routes
fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/authors/:author_id/subscription",
            put(subscriptions::subscribe),
        )
        .route(
            "/authors/:author_id/subscription",
            delete(subscriptions::unsubscribe),
        )
        .route(
            "/authors/:author_id/subscription",
            get(subscriptions::subscription_status),
        )
}
