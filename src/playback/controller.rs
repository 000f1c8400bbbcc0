// SPDX-License-Identifier: MPL-2.0
//! Playback controller for a single viewing session.
//!
//! Owns the current position, the [`PlaybackState`] and the two segment
//! timers. Every transition that leaves a segment cancels both timers and
//! bumps the generation before anything new is scheduled, so no timer event
//! from a superseded segment can act on the new one.
//!
//! Time is passed in explicitly (`now`) so the controller itself never reads
//! a clock.

use super::progress::{fraction_of, GroupProgress};
use super::timer::{Generation, TimerEvent, TimerId, TimerScheduler};
use crate::config::PlaybackSettings;
use crate::domain::playback::{PlaybackState, SegmentDuration, TickInterval};
use crate::error::SessionError;
use crate::navigation::ViewerCommand;
use crate::story::group::group_containing;
use crate::story::{Story, StoryId};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// Close button, escape key or backdrop click.
    Dismissed,
    /// The last story's segment ran out.
    Finished,
    /// `next` was requested on the last story.
    SkippedPastEnd,
    /// The host tore the viewer down.
    Unmounted,
}

/// What moved the viewer to another story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveCause {
    /// The segment deadline elapsed.
    Auto,
    /// A previous/next command.
    Manual,
}

/// Outward notification produced by a controller call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// The story's media became ready for the first time this session.
    MarkViewed(StoryId),
    /// The current story changed; its media must now be loaded.
    Moved {
        from: usize,
        to: usize,
        cause: MoveCause,
    },
    /// Sampled progress of the running segment.
    Progress(f32),
    /// The session ended.
    Closed(CloseReason),
}

/// Drives auto-advance, pause/resume and navigation over a story sequence.
pub struct PlaybackController<S: TimerScheduler> {
    stories: Arc<[Story]>,
    current_index: usize,
    state: PlaybackState,
    duration: SegmentDuration,
    tick: TickInterval,
    scheduler: S,
    deadline: Option<TimerId>,
    sampler: Option<TimerId>,
    generation: Generation,
    /// Stories already reported through [`Signal::MarkViewed`].
    announced: HashSet<StoryId>,
}

impl<S: TimerScheduler> PlaybackController<S> {
    /// Opens a controller at `start_index`, waiting for that story's media.
    ///
    /// # Errors
    ///
    /// Returns an error if `stories` is empty or `start_index` is out of range.
    pub fn open(
        stories: Arc<[Story]>,
        start_index: usize,
        settings: &PlaybackSettings,
        scheduler: S,
    ) -> Result<Self, SessionError> {
        if stories.is_empty() {
            return Err(SessionError::EmptyStories);
        }
        if start_index >= stories.len() {
            return Err(SessionError::StartIndexOutOfRange {
                index: start_index,
                len: stories.len(),
            });
        }

        Ok(Self {
            stories,
            current_index: start_index,
            state: PlaybackState::AwaitingMedia,
            duration: settings.segment_duration,
            tick: settings.tick_interval,
            scheduler,
            deadline: None,
            sampler: None,
            generation: Generation::default(),
            announced: HashSet::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_story(&self) -> &Story {
        &self.stories[self.current_index]
    }

    #[must_use]
    pub fn stories(&self) -> &Arc<[Story]> {
        &self.stories
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.stories.len()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn segment_duration(&self) -> SegmentDuration {
        self.duration
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Time left before auto-advance, if a segment is running.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.state
            .elapsed(now)
            .map(|elapsed| self.duration.as_duration().saturating_sub(elapsed))
    }

    // =========================================================================
    // Progress
    // =========================================================================

    /// Progress of the current segment in `[0, 1]`.
    ///
    /// Zero while waiting for media or after a failure; frozen while paused.
    #[must_use]
    pub fn sample_progress(&self, now: Instant) -> f32 {
        self.state
            .elapsed(now)
            .map_or(0.0, |elapsed| fraction_of(elapsed, self.duration))
    }

    /// Bar fills for the current owner's group.
    #[must_use]
    pub fn group_progress(&self, now: Instant) -> GroupProgress {
        let fraction = self.sample_progress(now);
        let paused = self.state.is_paused();
        match group_containing(&self.stories, self.current_index) {
            Some(group) => GroupProgress::new(
                group.len(),
                group.position_of(self.current_index).unwrap_or(0),
                fraction,
                paused,
            ),
            None => GroupProgress::new(1, 0, fraction, paused),
        }
    }

    // =========================================================================
    // Media callbacks
    // =========================================================================

    /// The media of `story` finished loading.
    ///
    /// Starts the segment if `story` is current and still loading. Emits
    /// [`Signal::MarkViewed`] the first time a story becomes ready.
    pub fn on_media_ready(&mut self, story: StoryId, now: Instant) -> Option<Signal> {
        if !self.is_current(story) {
            tracing::debug!("Ignoring media ready for non-current story {}", story);
            return None;
        }
        if !self.begin_segment(now) {
            return None;
        }
        self.announced
            .insert(story)
            .then_some(Signal::MarkViewed(story))
    }

    /// The media of `story` failed to load.
    ///
    /// The story stays on screen in the failed state without a countdown
    /// until the user navigates away.
    pub fn on_media_failed(&mut self, story: StoryId) {
        if !self.is_current(story) || !self.state.is_awaiting_media() {
            tracing::debug!("Ignoring media failure for story {}", story);
            return;
        }
        tracing::warn!("Media for story {} failed to load", story);
        self.state = PlaybackState::Failed;
    }

    fn is_current(&self, story: StoryId) -> bool {
        !self.is_closed() && self.current_story().id == story
    }

    /// Starts the countdown and sampler for the current story.
    ///
    /// Only valid while awaiting media; returns false (and schedules nothing)
    /// otherwise, so a segment can never own two competing deadlines.
    fn begin_segment(&mut self, now: Instant) -> bool {
        if !self.state.is_awaiting_media() {
            tracing::debug!("Segment already running or unavailable: {:?}", self.state);
            return false;
        }
        self.cancel_timers();
        self.state = PlaybackState::Playing {
            started_at: now,
            paused_total: Duration::ZERO,
        };
        self.schedule(self.duration.as_duration());
        true
    }

    // =========================================================================
    // Pause / resume
    // =========================================================================

    /// Suspends the countdown. Only acts while playing.
    pub fn pause(&mut self, now: Instant) -> bool {
        let PlaybackState::Playing {
            started_at,
            paused_total,
        } = self.state
        else {
            tracing::debug!("Ignoring pause in state {:?}", self.state);
            return false;
        };

        self.cancel_timers();
        self.state = PlaybackState::Paused {
            started_at,
            paused_total,
            paused_at: now,
        };
        true
    }

    /// Continues a paused countdown for exactly the time that was left.
    ///
    /// If nothing was left the segment expires immediately.
    pub fn resume(&mut self, now: Instant) -> Option<Signal> {
        let PlaybackState::Paused {
            started_at,
            paused_total,
            paused_at,
        } = self.state
        else {
            tracing::debug!("Ignoring resume in state {:?}", self.state);
            return None;
        };

        let paused_total = paused_total + now.saturating_duration_since(paused_at);
        self.state = PlaybackState::Playing {
            started_at,
            paused_total,
        };

        let elapsed = now
            .saturating_duration_since(started_at)
            .saturating_sub(paused_total);
        let remaining = self.duration.as_duration().saturating_sub(elapsed);
        if remaining.is_zero() {
            return self.expire_segment();
        }
        self.schedule(remaining);
        None
    }

    /// Pauses when playing, resumes when paused, otherwise does nothing.
    pub fn toggle_pause(&mut self, now: Instant) -> Option<Signal> {
        match self.state {
            PlaybackState::Playing { .. } => {
                self.pause(now);
                None
            }
            PlaybackState::Paused { .. } => self.resume(now),
            _ => None,
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Handles a timer event. Events from a superseded generation are dropped.
    pub fn on_timer(&mut self, event: TimerEvent, now: Instant) -> Option<Signal> {
        if event.generation() != self.generation || self.is_closed() {
            tracing::debug!("Dropping stale timer event {:?}", event);
            return None;
        }
        match event {
            TimerEvent::DeadlineElapsed(_) => self.expire_segment(),
            TimerEvent::SamplerTick(_) => Some(Signal::Progress(self.sample_progress(now))),
        }
    }

    /// The segment ran out: move on, or end the session after the last story.
    fn expire_segment(&mut self) -> Option<Signal> {
        if !self.state.is_playing() {
            tracing::debug!("Ignoring segment expiry in state {:?}", self.state);
            return None;
        }
        if self.is_last() {
            self.close(CloseReason::Finished)
        } else {
            self.move_to(self.current_index + 1, MoveCause::Auto)
        }
    }

    fn schedule(&mut self, remaining: Duration) {
        self.deadline = Some(self.scheduler.schedule_deadline(self.generation, remaining));
        self.sampler = Some(
            self.scheduler
                .start_sampler(self.generation, self.tick.as_duration()),
        );
    }

    /// Cancels both timers and invalidates any event they already queued.
    fn cancel_timers(&mut self) {
        if let Some(id) = self.deadline.take() {
            self.scheduler.cancel(id);
        }
        if let Some(id) = self.sampler.take() {
            self.scheduler.cancel(id);
        }
        self.generation = self.generation.next();
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Goes back one story. Does nothing at the first story.
    pub fn previous(&mut self) -> Option<Signal> {
        if self.is_closed() || self.current_index == 0 {
            return None;
        }
        self.move_to(self.current_index - 1, MoveCause::Manual)
    }

    /// Goes forward one story, or closes the session at the last story.
    pub fn next(&mut self) -> Option<Signal> {
        if self.is_closed() {
            return None;
        }
        if self.is_last() {
            self.close(CloseReason::SkippedPastEnd)
        } else {
            self.move_to(self.current_index + 1, MoveCause::Manual)
        }
    }

    /// Ends the session. Both timers are cancelled regardless of state.
    pub fn close(&mut self, reason: CloseReason) -> Option<Signal> {
        if self.is_closed() {
            return None;
        }
        self.cancel_timers();
        self.state = PlaybackState::Closed;
        tracing::info!(
            "Viewer closed at story {} ({:?})",
            self.current_index,
            reason
        );
        Some(Signal::Closed(reason))
    }

    /// Applies a resolved viewer command.
    pub fn apply(&mut self, command: ViewerCommand, now: Instant) -> Option<Signal> {
        match command {
            ViewerCommand::Previous => self.previous(),
            ViewerCommand::Next => self.next(),
            ViewerCommand::Close => self.close(CloseReason::Dismissed),
            ViewerCommand::TogglePause => self.toggle_pause(now),
        }
    }

    fn move_to(&mut self, index: usize, cause: MoveCause) -> Option<Signal> {
        self.cancel_timers();
        let from = self.current_index;
        self.current_index = index;
        self.state = PlaybackState::AwaitingMedia;
        tracing::debug!("Story {} -> {} ({:?})", from, index, cause);
        Some(Signal::Moved {
            from,
            to: index,
            cause,
        })
    }
}

impl<S: TimerScheduler> Drop for PlaybackController<S> {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

impl<S: TimerScheduler> std::fmt::Debug for PlaybackController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("current_index", &self.current_index)
            .field("story_count", &self.stories.len())
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
