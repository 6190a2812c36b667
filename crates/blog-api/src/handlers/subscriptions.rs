//! Subscription handlers

use axum::extract::{Path, State};
use blog_service::dto::SubscriptionResponse;
use blog_service::SubscriptionService;

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// Follow an author
///
/// PUT /authors/{author_id}/subscription
pub async fn subscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(author_id): Path<String>,
) -> ApiResult<ApiJson<SubscriptionResponse>> {
    let author_id = author_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid author_id format"))?;

    let service = SubscriptionService::new(state.service_context());
    let response = service.subscribe(auth.user_id, author_id).await?;
    Ok(ApiJson(response))
}

/// Unfollow an author
///
/// DELETE /authors/{author_id}/subscription
pub async fn unsubscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(author_id): Path<String>,
) -> ApiResult<ApiJson<SubscriptionResponse>> {
    let author_id = author_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid author_id format"))?;

    let service = SubscriptionService::new(state.service_context());
    let response = service.unsubscribe(auth.user_id, author_id).await?;
    Ok(ApiJson(response))
}

/// Whether the caller follows the author
///
/// GET /authors/{author_id}/subscription
pub async fn subscription_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(author_id): Path<String>,
) -> ApiResult<ApiJson<SubscriptionResponse>> {
    let author_id = author_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid author_id format"))?;

    let service = SubscriptionService::new(state.service_context());
    let subscribed = service.is_subscribed(auth.user_id, author_id).await?;
    Ok(ApiJson(SubscriptionResponse {
        author_id: author_id.to_string(),
        subscribed,
    }))
}
