//! Subscription entity - a reader following an author

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Subscription entity; at most one per (subscriber, author)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub subscriber_id: Snowflake,
    pub author_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Create a new subscription; a user cannot follow themselves
    pub fn new(subscriber_id: Snowflake, author_id: Snowflake) -> Result<Self, DomainError> {
        if subscriber_id == author_id {
            return Err(DomainError::SelfSubscription);
        }
        Ok(Self {
            subscriber_id,
            author_id,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_subscription_rejected() {
        assert!(Subscription::new(Snowflake::new(7), Snowflake::new(7)).is_err());
        assert!(Subscription::new(Snowflake::new(7), Snowflake::new(8)).is_ok());
    }
}
