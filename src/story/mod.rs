// SPDX-License-Identifier: MPL-2.0
//! Story records and the collections derived from them.
//!
//! The viewer only ever reads stories: the sequence is supplied once when a
//! session opens and is shared behind an `Arc<[Story]>`.

pub mod age;
pub mod catalog;
pub mod group;
pub mod viewed;

pub use group::{group_by_owner, StoryGroup};
pub use viewed::ViewedSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub u64);

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the account a story belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub String);

impl OwnerId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Visual content of a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaRef {
    Image { url: String },
    Video { url: String },
}

impl MediaRef {
    /// Returns the location of the media, whatever its kind.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            MediaRef::Image { url } | MediaRef::Video { url } => url,
        }
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, MediaRef::Video { .. })
    }
}

/// An immutable story record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub owner: OwnerId,
    pub media: MediaRef,
    pub created_at: DateTime<Utc>,
}
