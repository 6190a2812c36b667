//! Reaction handlers

use axum::extract::{Path, State};
use blog_service::dto::{ToggleReactionRequest, ToggleReactionResponse};
use blog_service::ReactionService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// Toggle the caller's reaction on a post
///
/// POST /posts/{post_id}/reactions/toggle
///
/// Returns 429 when the per-(user, post) cooldown has not elapsed.
pub async fn toggle_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ToggleReactionRequest>,
) -> ApiResult<ApiJson<ToggleReactionResponse>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = ReactionService::new(state.service_context());
    let response = service.toggle(post_id, auth.user_id, &request.kind).await?;
    Ok(ApiJson(response))
}
