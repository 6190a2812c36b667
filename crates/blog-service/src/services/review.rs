//! Review service
//!
//! Handles one-per-user post reviews and their aggregates.

use tracing::{info, instrument};

use blog_core::entities::Review;
use blog_core::{DomainError, Snowflake};

use crate::dto::{AddReviewRequest, ReviewResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a review to a post. One review per user per post.
    #[instrument(skip(self, request))]
    pub async fn add_review(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        request: AddReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let review = Review::new(post.id, user_id, request.rating, request.comment)?;

        if !self.ctx.review_repo().try_create(&review).await? {
            return Err(DomainError::AlreadyReviewed.into());
        }

        info!(post_id = %post_id, user_id = %user_id, rating = review.rating, "Review added");
        Ok(ReviewResponse::from(&review))
    }

    /// Mean rating over a post's reviews, None when the post has none
    #[instrument(skip(self))]
    pub async fn average_rating(&self, post_id: Snowflake) -> ServiceResult<Option<f64>> {
        Ok(self.ctx.review_repo().average_rating(post_id).await?)
    }
}

#[cfg(test)]
mod tests {
    // Covered by the service-level tests in tests/engagement_flow.rs
}
