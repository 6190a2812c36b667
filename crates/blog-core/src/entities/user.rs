//! User entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
///
/// Accounts are created elsewhere; this subsystem only reads them to resolve
/// mentions and authorize moderation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check whether the user may moderate comments
    #[inline]
    pub fn can_moderate(&self) -> bool {
        self.is_staff
    }
}
