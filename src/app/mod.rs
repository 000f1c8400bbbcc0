// SPDX-License-Identifier: MPL-2.0
//! Application root state: the story list and the viewer opened from it.
//!
//! `StoriesApp` owns the story sequence and the [`ViewedSet`]. It is the
//! observer the viewer reports viewed stories and closure to, and the only
//! place a viewer session is opened from, so at most one is open at a time.

use crate::config::PlaybackSettings;
use crate::error::SessionError;
use crate::playback::CloseReason;
use crate::session::{SessionObserver, ViewerSession};
use crate::story::{group_by_owner, Story, StoryGroup, StoryId, ViewedSet};
use std::fmt;
use std::sync::Arc;

/// What the application is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The horizontal list of story groups.
    #[default]
    List,
    /// The full-screen viewer, opened at `start_index`.
    Viewer { start_index: usize },
}

/// Root state bridging the story list and viewer sessions.
pub struct StoriesApp {
    stories: Arc<[Story]>,
    viewed: ViewedSet,
    screen: Screen,
    last_close: Option<CloseReason>,
}

impl fmt::Debug for StoriesApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoriesApp")
            .field("stories", &self.stories.len())
            .field("viewed", &self.viewed.len())
            .field("screen", &self.screen)
            .finish()
    }
}

impl StoriesApp {
    #[must_use]
    pub fn new(stories: Vec<Story>) -> Self {
        Self {
            stories: stories.into(),
            viewed: ViewedSet::new(),
            screen: Screen::List,
            last_close: None,
        }
    }

    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    #[must_use]
    pub fn viewed(&self) -> &ViewedSet {
        &self.viewed
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn is_viewer_open(&self) -> bool {
        matches!(self.screen, Screen::Viewer { .. })
    }

    /// How the most recent viewer session ended.
    #[must_use]
    pub fn last_close(&self) -> Option<CloseReason> {
        self.last_close
    }

    /// Story groups in list order.
    #[must_use]
    pub fn groups(&self) -> Vec<StoryGroup<'_>> {
        group_by_owner(&self.stories)
    }

    /// Index the viewer opens at when the `position`-th group is selected.
    #[must_use]
    pub fn select_group(&self, position: usize) -> Option<usize> {
        self.groups()
            .get(position)
            .map(StoryGroup::start_index)
    }

    /// Opens the viewer at `start_index`.
    ///
    /// # Errors
    ///
    /// Fails if a viewer is already open, there are no stories, or
    /// `start_index` is out of range.
    pub fn open_viewer(
        &mut self,
        start_index: usize,
        settings: &PlaybackSettings,
    ) -> Result<ViewerSession, SessionError> {
        if self.is_viewer_open() {
            return Err(SessionError::ViewerAlreadyOpen);
        }
        let session = ViewerSession::new(Arc::clone(&self.stories), start_index, settings)?;
        self.screen = Screen::Viewer { start_index };
        Ok(session)
    }

    /// Returns to the list. Does nothing if no viewer is open.
    pub fn close_viewer(&mut self) {
        if self.is_viewer_open() {
            tracing::debug!("Returning to story list");
            self.screen = Screen::List;
        }
    }
}

impl SessionObserver for StoriesApp {
    fn mark_viewed(&mut self, story: StoryId) {
        if self.viewed.insert(story) {
            tracing::debug!("Story {} viewed", story);
        }
    }

    fn closed(&mut self, reason: CloseReason) {
        self.last_close = Some(reason);
        self.close_viewer();
    }
}
