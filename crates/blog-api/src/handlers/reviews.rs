//! Review handlers

use axum::extract::{Path, State};
use axum::Json;
use blog_service::dto::{AddReviewRequest, ReviewResponse};
use blog_service::ReviewService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Add a review to a post
///
/// POST /posts/{post_id}/reviews
///
/// Returns 409 when the caller already reviewed the post.
pub async fn add_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AddReviewRequest>,
) -> ApiResult<Created<Json<ReviewResponse>>> {
    let post_id = post_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid post_id format"))?;

    let service = ReviewService::new(state.service_context());
    let review = service.add_review(post_id, auth.user_id, request).await?;
    Ok(Created(Json(review)))
}
