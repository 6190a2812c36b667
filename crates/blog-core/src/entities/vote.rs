//! Comment vote entity and the toggle transition

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// A vote's stored value
///
/// `Neutral` keeps the row alive after a toggle-off so the one-row-per-pair
/// invariant survives any toggle sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteValue {
    Up,
    Neutral,
    Down,
}

impl VoteValue {
    /// Numeric form stored in the database and summed for scores
    pub fn as_i16(self) -> i16 {
        match self {
            Self::Up => 1,
            Self::Neutral => 0,
            Self::Down => -1,
        }
    }

    /// Parse the stored numeric form
    pub fn from_i16(value: i16) -> Option<Self> {
        match value {
            1 => Some(Self::Up),
            0 => Some(Self::Neutral),
            -1 => Some(Self::Down),
            _ => None,
        }
    }

    /// Apply a toggle request against the current value.
    ///
    /// Re-clicking the current direction clears it; any other request flips
    /// directly to the target with no intermediate neutral step.
    pub fn toggled(self, target: VoteValue) -> VoteValue {
        if self == target {
            Self::Neutral
        } else {
            target
        }
    }
}

/// A vote toggle request direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// The vote value this direction targets
    pub fn target(self) -> VoteValue {
        match self {
            Self::Up => VoteValue::Up,
            Self::Down => VoteValue::Down,
        }
    }
}

impl FromStr for VoteDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(DomainError::UnknownVoteDirection(other.to_string())),
        }
    }
}

/// CommentVote entity
///
/// At most one row per (user, comment), enforced by a storage-level unique
/// constraint. Rows are never deleted once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentVote {
    pub comment_id: Snowflake,
    pub user_id: Snowflake,
    pub value: VoteValue,
}

impl CommentVote {
    /// Create a new CommentVote
    pub fn new(comment_id: Snowflake, user_id: Snowflake, value: VoteValue) -> Self {
        Self {
            comment_id,
            user_id,
            value,
        }
    }
}
