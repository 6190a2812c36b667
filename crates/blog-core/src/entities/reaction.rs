//! Reaction entity - a user's single emoji reaction to a post

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// The closed set of supported reactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Love,
    Haha,
    Wow,
}

impl ReactionKind {
    /// All kinds, in display order
    pub const ALL: [ReactionKind; 4] = [Self::Like, Self::Love, Self::Haha, Self::Wow];

    /// Stable wire name for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Haha => "haha",
            Self::Wow => "wow",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "love" => Ok(Self::Love),
            "haha" => Ok(Self::Haha),
            "wow" => Ok(Self::Wow),
            other => Err(DomainError::UnknownReactionKind(other.to_string())),
        }
    }
}

/// Reaction entity
///
/// At most one row per (user, post); changing kind mutates the row in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub post_id: Snowflake,
    pub user_id: Snowflake,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(post_id: Snowflake, user_id: Snowflake, kind: ReactionKind) -> Self {
        Self {
            post_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Per-kind reaction tallies for a post
///
/// One field per kind, so every serialization carries all four keys even when
/// a kind has zero occurrences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub like: i64,
    pub love: i64,
    pub haha: i64,
    pub wow: i64,
}

impl ReactionCounts {
    /// Build counts from grouped (kind, count) rows; absent kinds stay 0.
    pub fn from_rows(rows: &[(ReactionKind, i64)]) -> Self {
        let mut counts = Self::default();
        for (kind, count) in rows {
            *counts.get_mut(*kind) += count;
        }
        counts
    }

    /// Count for a single kind
    pub fn get(&self, kind: ReactionKind) -> i64 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Love => self.love,
            ReactionKind::Haha => self.haha,
            ReactionKind::Wow => self.wow,
        }
    }

    fn get_mut(&mut self, kind: ReactionKind) -> &mut i64 {
        match kind {
            ReactionKind::Like => &mut self.like,
            ReactionKind::Love => &mut self.love,
            ReactionKind::Haha => &mut self.haha,
            ReactionKind::Wow => &mut self.wow,
        }
    }

    /// Total reactions across all kinds
    pub fn total(&self) -> i64 {
        self.like + self.love + self.haha + self.wow
    }
}

/// Outcome of a reaction toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Changed,
    Removed,
}
