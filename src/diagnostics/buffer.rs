// SPDX-License-Identifier: MPL-2.0
//! Fixed-capacity ring that keeps the newest entries of the activity log.

use std::collections::VecDeque;

/// Keeps at most `limit` entries, oldest first; a push past the limit drops
/// the oldest.
#[derive(Debug, Clone)]
pub(crate) struct RingLog<T> {
    entries: VecDeque<T>,
    limit: usize,
}

impl<T> RingLog<T> {
    /// A zero limit is raised to one so the latest entry is always kept.
    pub(crate) fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    pub(crate) fn push(&mut self, entry: T) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
