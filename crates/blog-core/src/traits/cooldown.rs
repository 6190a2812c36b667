//! Cooldown store port - rate limiting for toggle operations

use std::time::Duration;

use async_trait::async_trait;

use crate::traits::RepoResult;
use crate::value_objects::Snowflake;

/// Short-lived per-(user, post) locks that throttle reaction toggles.
///
/// `try_acquire` must be a single atomic check-and-set: two concurrent calls
/// for the same pair may both succeed only if the ttl has elapsed between
/// them.
#[async_trait]
pub trait CooldownStore: Send + Sync {
    /// Claim the cooldown slot for (user, post).
    ///
    /// Returns true and starts the ttl when the slot is free, false when a
    /// previous claim is still live. Never extends an existing ttl.
    async fn try_acquire(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
        ttl: Duration,
    ) -> RepoResult<bool>;

    /// Whether a claim for (user, post) is still live.
    async fn is_active(&self, user_id: Snowflake, post_id: Snowflake) -> RepoResult<bool>;
}
