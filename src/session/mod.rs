// SPDX-License-Identifier: MPL-2.0
//! Viewing session: one full-screen viewer from open to close.
//!
//! A [`ViewerSession`] owns the [`PlaybackController`] and the receiving end
//! of its timer channel, and drives both from a single task. Host input
//! (viewer input and media load results) arrives over an unbounded channel;
//! dropping the sender unmounts the viewer.

mod observer;

pub use observer::SessionObserver;

use crate::config::PlaybackSettings;
use crate::diagnostics::{ActivityLog, RecordedEvent, SessionEvent};
use crate::error::{Result, SessionError};
use crate::navigation::{NavigationResolver, ViewerCommand, ViewerInput};
use crate::playback::{CloseReason, PlaybackController, Signal, TimerEvent, TokioScheduler};
use crate::story::{Story, StoryId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Input a host feeds into a running session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionInput {
    Viewer(ViewerInput),
    MediaReady(StoryId),
    MediaFailed(StoryId),
    /// The viewer lost keyboard focus; held keys are forgotten.
    FocusLost,
}

/// Summary returned when a session ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Index of the story shown when the session closed.
    pub final_index: usize,
    pub close_reason: CloseReason,
    /// Stories marked viewed, in the order they were marked.
    pub viewed: Vec<StoryId>,
    pub events: Vec<RecordedEvent>,
}

impl SessionReport {
    /// Renders the report as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

enum Step {
    Input(Option<SessionInput>),
    Timer(TimerEvent),
}

/// A single viewing session driven by tokio timers.
#[derive(Debug)]
pub struct ViewerSession {
    controller: PlaybackController<TokioScheduler>,
    timer_events: mpsc::UnboundedReceiver<TimerEvent>,
    resolver: NavigationResolver,
    log: ActivityLog,
    viewed: Vec<StoryId>,
    close_reason: Option<CloseReason>,
}

fn clock() -> Instant {
    tokio::time::Instant::now().into_std()
}

impl ViewerSession {
    /// Opens a session at `start_index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `stories` is empty or `start_index` is out of range.
    pub fn new(
        stories: Arc<[Story]>,
        start_index: usize,
        settings: &PlaybackSettings,
    ) -> std::result::Result<Self, SessionError> {
        let (scheduler, timer_events) = TokioScheduler::new();
        let controller = PlaybackController::open(stories, start_index, settings, scheduler)?;

        let opened_at = clock();
        let mut log = ActivityLog::new(opened_at, settings.activity_log_capacity);
        log.record(
            opened_at,
            SessionEvent::Opened {
                story: controller.current_story().id,
                index: start_index,
            },
        );

        Ok(Self {
            controller,
            timer_events,
            resolver: NavigationResolver::new(settings.edge_zone),
            log,
            viewed: Vec::new(),
            close_reason: None,
        })
    }

    #[must_use]
    pub fn controller(&self) -> &PlaybackController<TokioScheduler> {
        &self.controller
    }

    /// Runs the session until it closes or `inputs` is dropped.
    pub async fn run<O: SessionObserver>(
        mut self,
        mut inputs: mpsc::UnboundedReceiver<SessionInput>,
        mut observer: O,
    ) -> SessionReport {
        tracing::info!(
            "Viewer opened at story {} of {}",
            self.controller.current_index(),
            self.controller.stories().len()
        );
        observer.story_changed(
            self.controller.current_story(),
            self.controller.current_index(),
        );

        while !self.controller.is_closed() {
            let step = tokio::select! {
                biased;
                input = inputs.recv() => Step::Input(input),
                Some(event) = self.timer_events.recv() => Step::Timer(event),
            };

            let now = clock();
            match step {
                Step::Input(Some(input)) => self.handle_input(input, now, &mut observer),
                Step::Input(None) => {
                    let signal = self.controller.close(CloseReason::Unmounted);
                    self.dispatch(signal, now, &mut observer);
                }
                Step::Timer(event) => {
                    let signal = self.controller.on_timer(event, now);
                    self.dispatch(signal, now, &mut observer);
                }
            }
        }

        self.finish()
    }

    fn handle_input<O: SessionObserver>(
        &mut self,
        input: SessionInput,
        now: Instant,
        observer: &mut O,
    ) {
        match input {
            SessionInput::Viewer(input) => {
                if let Some(command) = self.resolver.resolve(input) {
                    self.apply(command, now, observer);
                }
            }
            SessionInput::MediaReady(story) => {
                self.log.record(now, SessionEvent::MediaReady { story });
                let signal = self.controller.on_media_ready(story, now);
                self.dispatch(signal, now, observer);
            }
            SessionInput::MediaFailed(story) => {
                self.log.record(now, SessionEvent::MediaFailed { story });
                self.controller.on_media_failed(story);
            }
            SessionInput::FocusLost => self.resolver.reset(),
        }
    }

    fn apply<O: SessionObserver>(
        &mut self,
        command: ViewerCommand,
        now: Instant,
        observer: &mut O,
    ) {
        let before = self.controller.state();
        let signal = self.controller.apply(command, now);
        let after = self.controller.state();

        if before.is_playing() && after.is_paused() {
            self.log.record(now, SessionEvent::Paused);
            observer.progress(&self.controller.group_progress(now));
        } else if before.is_paused() && after.is_playing() {
            self.log.record(now, SessionEvent::Resumed);
        }
        self.dispatch(signal, now, observer);
    }

    fn dispatch<O: SessionObserver>(
        &mut self,
        signal: Option<Signal>,
        now: Instant,
        observer: &mut O,
    ) {
        let Some(signal) = signal else {
            return;
        };
        match signal {
            Signal::MarkViewed(story) => {
                self.viewed.push(story);
                self.log.record(now, SessionEvent::Viewed { story });
                observer.mark_viewed(story);
            }
            Signal::Moved { from, to, cause } => {
                self.log.record(now, SessionEvent::Moved { from, to, cause });
                observer.story_changed(self.controller.current_story(), to);
            }
            Signal::Progress(_) => observer.progress(&self.controller.group_progress(now)),
            Signal::Closed(reason) => {
                self.close_reason = Some(reason);
                self.log.record(now, SessionEvent::Closed { reason });
                observer.closed(reason);
            }
        }
    }

    fn finish(self) -> SessionReport {
        SessionReport {
            final_index: self.controller.current_index(),
            close_reason: self.close_reason.unwrap_or(CloseReason::Unmounted),
            viewed: self.viewed,
            events: self.log.events(),
        }
    }
}
