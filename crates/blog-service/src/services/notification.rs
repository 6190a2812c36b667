//! Notification service
//!
//! Read-side operations over a user's notification feed.

use tracing::{info, instrument};

use blog_core::{DomainError, Snowflake};

use crate::dto::{NotificationListResponse, NotificationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The user's most recent notifications plus the unread tally
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Snowflake) -> ServiceResult<NotificationListResponse> {
        let notifications = self
            .ctx
            .notification_repo()
            .find_by_recipient(user_id, self.ctx.notification_page_size())
            .await?;
        let unread_count = self.ctx.notification_repo().unread_count(user_id).await?;

        Ok(NotificationListResponse {
            notifications: notifications.iter().map(NotificationResponse::from).collect(),
            unread_count,
        })
    }

    /// Mark a notification read.
    ///
    /// The recipient scoping is enforced in storage: a foreign or unknown id
    /// affects nothing and surfaces as not found.
    #[instrument(skip(self))]
    pub async fn open(&self, id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let marked = self.ctx.notification_repo().mark_read(id, user_id).await?;
        if !marked {
            return Err(DomainError::NotificationNotFound(id).into());
        }

        info!(notification_id = %id, user_id = %user_id, "Notification read");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Covered by the service-level tests in tests/engagement_flow.rs
}
