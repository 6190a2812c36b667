//! Subscription service
//!
//! Handles following and unfollowing authors.

use tracing::{info, instrument};

use blog_core::entities::Subscription;
use blog_core::{DomainError, Snowflake};

use crate::dto::SubscriptionResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Subscription service
pub struct SubscriptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubscriptionService<'a> {
    /// Create a new SubscriptionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Subscribe to an author
    #[instrument(skip(self))]
    pub async fn subscribe(
        &self,
        subscriber_id: Snowflake,
        author_id: Snowflake,
    ) -> ServiceResult<SubscriptionResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", author_id.to_string()))?;

        let subscription = Subscription::new(subscriber_id, author.id)?;

        if !self
            .ctx
            .subscription_repo()
            .try_create(&subscription)
            .await?
        {
            return Err(DomainError::AlreadySubscribed.into());
        }

        info!(subscriber_id = %subscriber_id, author_id = %author_id, "Subscribed");
        Ok(SubscriptionResponse {
            author_id: author_id.to_string(),
            subscribed: true,
        })
    }

    /// Unsubscribe from an author
    #[instrument(skip(self))]
    pub async fn unsubscribe(
        &self,
        subscriber_id: Snowflake,
        author_id: Snowflake,
    ) -> ServiceResult<SubscriptionResponse> {
        let removed = self
            .ctx
            .subscription_repo()
            .delete(subscriber_id, author_id)
            .await?;
        if !removed {
            return Err(ServiceError::not_found(
                "Subscription",
                author_id.to_string(),
            ));
        }

        info!(subscriber_id = %subscriber_id, author_id = %author_id, "Unsubscribed");
        Ok(SubscriptionResponse {
            author_id: author_id.to_string(),
            subscribed: false,
        })
    }

    /// Whether the user follows the author
    #[instrument(skip(self))]
    pub async fn is_subscribed(
        &self,
        subscriber_id: Snowflake,
        author_id: Snowflake,
    ) -> ServiceResult<bool> {
        Ok(self
            .ctx
            .subscription_repo()
            .exists(subscriber_id, author_id)
            .await?)
    }
}
