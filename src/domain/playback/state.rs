// SPDX-License-Identifier: MPL-2.0
//! Story playback state machine.
//!
//! Exactly one of these holds for the current story at any instant:
//! - AwaitingMedia: story selected, media still loading, no countdown
//! - Playing: countdown running since `started_at`
//! - Paused: countdown suspended at `paused_at`
//! - Failed: media failed to load, waits for manual navigation
//! - Closed: session over, every further call is ignored

use std::time::{Duration, Instant};

/// Represents the playback state of the current story segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Media for the current story has not signalled ready yet.
    #[default]
    AwaitingMedia,

    /// Segment is counting down.
    Playing {
        /// When the segment timer began.
        started_at: Instant,
        /// Total time spent paused since `started_at`.
        paused_total: Duration,
    },

    /// Segment countdown is suspended.
    Paused {
        /// When the segment timer began.
        started_at: Instant,
        /// Paused time accumulated before the current pause.
        paused_total: Duration,
        /// When the current pause began.
        paused_at: Instant,
    },

    /// Media failed to load; no countdown until the user navigates away.
    Failed,

    /// The viewing session has ended.
    Closed,
}

impl PlaybackState {
    /// Returns true if the segment is counting down.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    /// Returns true if the segment is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused { .. })
    }

    /// Returns true while the current story's media is loading.
    #[must_use]
    pub fn is_awaiting_media(self) -> bool {
        matches!(self, Self::AwaitingMedia)
    }

    /// Returns true if the current story's media failed to load.
    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Returns true once the session has ended.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns true if a segment has started (playing or paused).
    #[must_use]
    pub fn has_segment(self) -> bool {
        matches!(self, Self::Playing { .. } | Self::Paused { .. })
    }

    /// Counted segment time at `now`, excluding every pause.
    ///
    /// While paused the value is frozen at the pause instant.
    /// Returns `None` when no segment is running.
    #[must_use]
    pub fn elapsed(self, now: Instant) -> Option<Duration> {
        match self {
            Self::Playing {
                started_at,
                paused_total,
            } => Some(
                now.saturating_duration_since(started_at)
                    .saturating_sub(paused_total),
            ),
            Self::Paused {
                started_at,
                paused_total,
                paused_at,
            } => Some(
                paused_at
                    .saturating_duration_since(started_at)
                    .saturating_sub(paused_total),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_awaiting_media() {
        assert_eq!(PlaybackState::default(), PlaybackState::AwaitingMedia);
    }

    #[test]
    fn state_checks_are_exclusive() {
        let t0 = Instant::now();
        let playing = PlaybackState::Playing {
            started_at: t0,
            paused_total: Duration::ZERO,
        };
        let paused = PlaybackState::Paused {
            started_at: t0,
            paused_total: Duration::ZERO,
            paused_at: t0,
        };

        assert!(playing.is_playing());
        assert!(!playing.is_paused());
        assert!(paused.is_paused());
        assert!(!paused.is_playing());
        assert!(PlaybackState::Failed.is_failed());
        assert!(PlaybackState::Closed.is_closed());
        assert!(!PlaybackState::AwaitingMedia.has_segment());
        assert!(playing.has_segment() && paused.has_segment());
    }

    #[test]
    fn elapsed_excludes_pauses() {
        let t0 = Instant::now();
        let state = PlaybackState::Playing {
            started_at: t0,
            paused_total: Duration::from_millis(300),
        };
        assert_eq!(
            state.elapsed(t0 + Duration::from_millis(1_000)),
            Some(Duration::from_millis(700))
        );
    }

    #[test]
    fn elapsed_is_frozen_while_paused() {
        let t0 = Instant::now();
        let state = PlaybackState::Paused {
            started_at: t0,
            paused_total: Duration::ZERO,
            paused_at: t0 + Duration::from_millis(200),
        };
        assert_eq!(
            state.elapsed(t0 + Duration::from_secs(60)),
            Some(Duration::from_millis(200))
        );
    }

    #[test]
    fn elapsed_is_none_without_segment() {
        let now = Instant::now();
        assert_eq!(PlaybackState::AwaitingMedia.elapsed(now), None);
        assert_eq!(PlaybackState::Failed.elapsed(now), None);
        assert_eq!(PlaybackState::Closed.elapsed(now), None);
    }
}
