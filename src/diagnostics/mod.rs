// SPDX-License-Identifier: MPL-2.0
//! Activity log of a viewing session.
//!
//! Session events are stamped relative to when the viewer opened and kept in
//! a fixed-size ring; the oldest entries are dropped once
//! the configured capacity is reached.

mod buffer;
mod events;

pub use events::{RecordedEvent, SessionEvent};

use buffer::RingLog;
use std::time::Instant;

/// Bounded, timestamped record of [`SessionEvent`]s.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    opened_at: Instant,
    buffer: RingLog<RecordedEvent>,
}

impl ActivityLog {
    #[must_use]
    pub fn new(opened_at: Instant, capacity: usize) -> Self {
        Self {
            opened_at,
            buffer: RingLog::with_limit(capacity),
        }
    }

    /// Records `event` as having happened at `now`.
    pub fn record(&mut self, now: Instant, event: SessionEvent) {
        let elapsed = now.saturating_duration_since(self.opened_at);
        let at_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        tracing::trace!("Session event at {} ms: {:?}", at_ms, event);
        self.buffer.push(RecordedEvent { at_ms, event });
    }

    /// Retained events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.buffer.iter().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::StoryId;
    use std::time::Duration;

    #[test]
    fn stamps_events_relative_to_open() {
        let opened = Instant::now();
        let mut log = ActivityLog::new(opened, 16);
        log.record(opened, SessionEvent::MediaReady { story: StoryId(3) });
        log.record(opened + Duration::from_millis(1_500), SessionEvent::Paused);

        let events = log.events();
        assert_eq!(events[0].at_ms, 0);
        assert_eq!(events[1].at_ms, 1_500);
        assert_eq!(events[1].event, SessionEvent::Paused);
    }

    #[test]
    fn keeps_only_most_recent_events() {
        let opened = Instant::now();
        let mut log = ActivityLog::new(opened, 2);
        log.record(opened, SessionEvent::Paused);
        log.record(opened, SessionEvent::Resumed);
        log.record(opened, SessionEvent::Paused);

        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].event, SessionEvent::Resumed);
    }
}
