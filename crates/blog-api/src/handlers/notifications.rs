//! Notification handlers

use axum::extract::{Path, State};
use blog_service::dto::NotificationListResponse;
use blog_service::NotificationService;

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiJson, ApiResult, NoContent};
use crate::state::AppState;

/// The caller's recent notifications with the unread tally
///
/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<NotificationListResponse>> {
    let service = NotificationService::new(state.service_context());
    let feed = service.list(auth.user_id).await?;
    Ok(ApiJson(feed))
}

/// Mark one of the caller's notifications read
///
/// POST /notifications/{notification_id}/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<NoContent> {
    let notification_id = notification_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid notification_id format"))?;

    let service = NotificationService::new(state.service_context());
    service.open(notification_id, auth.user_id).await?;
    Ok(NoContent)
}
