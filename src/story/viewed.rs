// SPDX-License-Identifier: MPL-2.0
//! Set of stories seen during the current application run.

use super::StoryId;
use std::collections::HashSet;

/// Append-only set of viewed story identifiers.
///
/// Nothing is ever removed: a story stays viewed until the set is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewedSet {
    ids: HashSet<StoryId>,
}

impl ViewedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a story as viewed. Returns true if it was not viewed before.
    pub fn insert(&mut self, id: StoryId) -> bool {
        self.ids.insert(id)
    }

    #[must_use]
    pub fn contains(&self, id: StoryId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
