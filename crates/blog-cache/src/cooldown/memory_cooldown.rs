//! In-process cooldown store.
//!
//! Backs single-node deployments and tests where Redis is unavailable.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;

use blog_core::traits::{CooldownStore, RepoResult};
use blog_core::value_objects::Snowflake;

/// In-memory implementation of `CooldownStore`
///
/// Expired entries are swept lazily on each acquire.
#[derive(Default)]
pub struct MemoryCooldownStore {
    entries: Mutex<HashMap<(Snowflake, Snowflake), Instant>>,
}

impl MemoryCooldownStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CooldownStore for MemoryCooldownStore {
    async fn try_acquire(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
        ttl: Duration,
    ) -> RepoResult<bool> {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        entries.retain(|_, expires_at| *expires_at > now);

        match entries.get(&(user_id, post_id)) {
            Some(_) => Ok(false),
            None => {
                entries.insert((user_id, post_id), now + ttl);
                Ok(true)
            }
        }
    }

    async fn is_active(&self, user_id: Snowflake, post_id: Snowflake) -> RepoResult<bool> {
        let now = Instant::now();
        let entries = self.entries.lock();
        Ok(entries
            .get(&(user_id, post_id))
            .is_some_and(|expires_at| *expires_at > now))
    }
}
