// SPDX-License-Identifier: MPL-2.0
//! Outward callbacks of a viewing session.

use crate::playback::{CloseReason, GroupProgress};
use crate::story::{Story, StoryId};

/// Receives what a [`ViewerSession`](super::ViewerSession) reports to its host.
pub trait SessionObserver {
    /// `story` became ready for the first time this session.
    fn mark_viewed(&mut self, story: StoryId);

    /// The viewer now shows `story`; the host should load its media and
    /// answer with `MediaReady` or `MediaFailed`.
    fn story_changed(&mut self, _story: &Story, _index: usize) {}

    /// Sampled progress of the current group.
    fn progress(&mut self, _progress: &GroupProgress) {}

    /// The session ended.
    fn closed(&mut self, reason: CloseReason);
}

impl<O: SessionObserver + ?Sized> SessionObserver for &mut O {
    fn mark_viewed(&mut self, story: StoryId) {
        (**self).mark_viewed(story);
    }

    fn story_changed(&mut self, story: &Story, index: usize) {
        (**self).story_changed(story, index);
    }

    fn progress(&mut self, progress: &GroupProgress) {
        (**self).progress(progress);
    }

    fn closed(&mut self, reason: CloseReason) {
        (**self).closed(reason);
    }
}
