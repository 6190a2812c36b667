//! Comment handlers
//!
//! Comment creation, vote toggles, and moderation endpoints.

use axum::extract::{Path, State};
use axum::Json;
use blog_service::dto::{AddCommentRequest, ToggleVoteRequest, ToggleVoteResponse};
use blog_service::{CommentService, VoteService};
use serde::Serialize;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Body returned after creating a comment
#[derive(Debug, Serialize)]
pub struct CommentCreatedResponse {
    pub id: String,
    pub post_id: String,
    pub content: String,
    /// New comments await moderation before appearing to readers
    pub is_approved: bool,
}

/// Add a comment to a post
///
/// POST /posts/{post_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AddCommentRequest>,
) -> ApiResult<Created<Json<CommentCreatedResponse>>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = CommentService::new(state.service_context());
    let comment = service.add_comment(post_id, auth.user_id, request).await?;

    Ok(Created(Json(CommentCreatedResponse {
        id: comment.id.to_string(),
        post_id: comment.post_id.to_string(),
        content: comment.content,
        is_approved: comment.is_approved,
    })))
}

/// Toggle the caller's vote on a comment
///
/// POST /comments/{comment_id}/votes/toggle
pub async fn toggle_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ToggleVoteRequest>,
) -> ApiResult<ApiJson<ToggleVoteResponse>> {
    let comment_id = comment_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))?;

    let service = VoteService::new(state.service_context());
    let response = service
        .toggle(comment_id, auth.user_id, &request.direction)
        .await?;
    Ok(ApiJson(response))
}

/// Pin state after a toggle
#[derive(Debug, Serialize)]
pub struct PinResponse {
    pub pinned: bool,
}

/// Toggle the pinned flag on a comment
///
/// POST /comments/{comment_id}/pin
pub async fn toggle_pin(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<String>,
) -> ApiResult<ApiJson<PinResponse>> {
    let comment_id = comment_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))?;

    let service = CommentService::new(state.service_context());
    let pinned = service.toggle_pin(comment_id, auth.user_id).await?;
    Ok(ApiJson(PinResponse { pinned }))
}

/// Approve a pending comment
///
/// POST /comments/{comment_id}/approve
pub async fn approve_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let comment_id = comment_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))?;

    let service = CommentService::new(state.service_context());
    service.approve(comment_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Reject a comment (soft delete)
///
/// DELETE /comments/{comment_id}
pub async fn reject_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<String>,
) -> ApiResult<NoContent> {
    let comment_id = comment_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))?;

    let service = CommentService::new(state.service_context());
    service.reject(comment_id, auth.user_id).await?;
    Ok(NoContent)
}
