// SPDX-License-Identifier: MPL-2.0
//! Events recorded during a viewing session.

use crate::playback::{CloseReason, MoveCause};
use crate::story::StoryId;
use serde::{Deserialize, Serialize};

/// Something that happened in a viewing session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The viewer opened on `story` at `index`.
    Opened { story: StoryId, index: usize },

    // ==========================================================================
    // Media
    // ==========================================================================
    MediaReady { story: StoryId },
    MediaFailed { story: StoryId },
    /// First time `story` was shown this session.
    Viewed { story: StoryId },

    // ==========================================================================
    // Playback
    // ==========================================================================
    Paused,
    Resumed,
    Moved {
        from: usize,
        to: usize,
        cause: MoveCause,
    },
    Closed { reason: CloseReason },
}

/// A [`SessionEvent`] stamped with its offset from session start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// Milliseconds since the viewer opened.
    pub at_ms: u64,
    pub event: SessionEvent,
}
