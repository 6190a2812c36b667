//! Engagement read handlers

use axum::extract::{Path, State};
use blog_service::dto::EngagementResponse;
use blog_service::EngagementService;

use crate::extractors::OptionalAuthUser;
use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// Full engagement state of a post
///
/// GET /posts/{post_id}/engagement
///
/// Works for anonymous readers; an Authorization header additionally fills
/// the viewer's own reaction and vote flags.
pub async fn get_engagement(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(post_id): Path<String>,
) -> ApiResult<ApiJson<EngagementResponse>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = EngagementService::new(state.service_context());
    let engagement = service.get_engagement(post_id, auth.user_id()).await?;
    Ok(ApiJson(engagement))
}
