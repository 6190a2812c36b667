//! Redis-backed cooldown store.
//!
//! Rate-limits reaction toggles with short-lived per-(user, post) keys.

use std::time::Duration;

use async_trait::async_trait;

use blog_core::error::DomainError;
use blog_core::traits::{CooldownStore, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::pool::RedisPool;

/// Key prefix for reaction cooldowns
const COOLDOWN_PREFIX: &str = "reaction-cooldown:";

/// Redis implementation of `CooldownStore`
///
/// The check-and-set is a single `SET key 1 NX EX ttl`, so concurrent
/// toggles for the same pair cannot both pass inside one window.
#[derive(Clone)]
pub struct RedisCooldownStore {
    pool: RedisPool,
}

impl RedisCooldownStore {
    /// Create a new RedisCooldownStore
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Generate the Redis key for a (user, post) pair
    fn key(user_id: Snowflake, post_id: Snowflake) -> String {
        format!("{COOLDOWN_PREFIX}{user_id}:{post_id}")
    }
}

#[async_trait]
impl CooldownStore for RedisCooldownStore {
    async fn try_acquire(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
        ttl: Duration,
    ) -> RepoResult<bool> {
        let key = Self::key(user_id, post_id);
        let ttl_secs = ttl.as_secs().max(1);

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        // SET NX returns nil when the key already exists
        let reply: Option<String> = redis::cmd("SET")
            .arg(&key)
            .arg(1)
            .arg("NX")
            .arg("EX")
            .arg(ttl_secs)
            .query_async(&mut conn)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        let acquired = reply.is_some();
        if !acquired {
            tracing::debug!(user_id = %user_id, post_id = %post_id, "Toggle still cooling down");
        }

        Ok(acquired)
    }

    async fn is_active(&self, user_id: Snowflake, post_id: Snowflake) -> RepoResult<bool> {
        let key = Self::key(user_id, post_id);

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        let exists: bool = redis::cmd("EXISTS")
            .arg(&key)
            .query_async(&mut conn)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        let key = RedisCooldownStore::key(Snowflake::new(7), Snowflake::new(42));
        assert_eq!(key, "reaction-cooldown:7:42");
    }
}
