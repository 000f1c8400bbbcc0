// SPDX-License-Identifier: MPL-2.0
//! Segment timers: the single-shot auto-advance deadline and the recurring
//! progress sampler.
//!
//! The controller owns the [`TimerId`]s it receives and is the only caller of
//! [`TimerScheduler::cancel`]. Every event carries the [`Generation`] it was
//! scheduled under so an event already queued when its timer was cancelled
//! can be recognised and dropped.

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Segment generation. Bumped every time the running timers are cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Event delivered when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The auto-advance deadline elapsed.
    DeadlineElapsed(Generation),
    /// The progress sampler ticked.
    SamplerTick(Generation),
}

impl TimerEvent {
    #[must_use]
    pub fn generation(self) -> Generation {
        match self {
            TimerEvent::DeadlineElapsed(generation) | TimerEvent::SamplerTick(generation) => {
                generation
            }
        }
    }
}

/// Starts and cancels segment timers on behalf of a controller.
pub trait TimerScheduler {
    /// Schedules a single [`TimerEvent::DeadlineElapsed`] after `after`.
    fn schedule_deadline(&mut self, generation: Generation, after: Duration) -> TimerId;

    /// Starts emitting [`TimerEvent::SamplerTick`] every `every` until cancelled.
    fn start_sampler(&mut self, generation: Generation, every: Duration) -> TimerId;

    /// Cancels a timer. Cancelling an unknown or finished timer is a no-op.
    fn cancel(&mut self, id: TimerId);
}

/// Timer scheduler backed by tokio tasks.
///
/// Each timer is a spawned task that sends its events over an unbounded
/// channel; cancelling aborts the task. Must be used from within a tokio
/// runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    events: mpsc::UnboundedSender<TimerEvent>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    next_id: u64,
}

impl TokioScheduler {
    /// Creates a scheduler and the receiver its timer events arrive on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (
            Self {
                events,
                tasks: HashMap::new(),
                next_id: 0,
            },
            receiver,
        )
    }

    /// Number of timers that are still running.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }

    fn register(&mut self, task: JoinHandle<()>) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(id, task);
        id
    }
}

impl TimerScheduler for TokioScheduler {
    fn schedule_deadline(&mut self, generation: Generation, after: Duration) -> TimerId {
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // Receiver gone means the session ended; nothing to notify.
            let _ = events.send(TimerEvent::DeadlineElapsed(generation));
        });
        self.register(task)
    }

    fn start_sampler(&mut self, generation: Generation, every: Duration) -> TimerId {
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + every;
            let mut ticker = tokio::time::interval_at(start, every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if events.send(TimerEvent::SamplerTick(generation)).is_err() {
                    break;
                }
            }
        });
        self.register(task)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

/// Scheduler double that records every request instead of running timers.
#[cfg(test)]
pub(crate) mod recording {
    use super::{Generation, TimerId, TimerScheduler};
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Kind {
        Deadline(Duration),
        Sampler(Duration),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Scheduled {
        pub id: TimerId,
        pub generation: Generation,
        pub kind: Kind,
        pub cancelled: bool,
    }

    #[derive(Debug, Default)]
    pub struct RecordingScheduler {
        pub scheduled: Vec<Scheduled>,
    }

    impl RecordingScheduler {
        pub fn live(&self) -> impl Iterator<Item = &Scheduled> {
            self.scheduled.iter().filter(|timer| !timer.cancelled)
        }

        /// Remaining time and generation of the live deadline, if any.
        pub fn live_deadline(&self) -> Option<(Generation, Duration)> {
            self.live().find_map(|timer| match timer.kind {
                Kind::Deadline(after) => Some((timer.generation, after)),
                Kind::Sampler(_) => None,
            })
        }

        pub fn live_sampler(&self) -> Option<Generation> {
            self.live().find_map(|timer| match timer.kind {
                Kind::Sampler(_) => Some(timer.generation),
                Kind::Deadline(_) => None,
            })
        }

        pub fn deadlines_scheduled(&self) -> usize {
            self.scheduled
                .iter()
                .filter(|timer| matches!(timer.kind, Kind::Deadline(_)))
                .count()
        }

        fn push(&mut self, generation: Generation, kind: Kind) -> TimerId {
            let id = TimerId(self.scheduled.len() as u64);
            self.scheduled.push(Scheduled {
                id,
                generation,
                kind,
                cancelled: false,
            });
            id
        }
    }

    impl TimerScheduler for RecordingScheduler {
        fn schedule_deadline(&mut self, generation: Generation, after: Duration) -> TimerId {
            self.push(generation, Kind::Deadline(after))
        }

        fn start_sampler(&mut self, generation: Generation, every: Duration) -> TimerId {
            self.push(generation, Kind::Sampler(every))
        }

        fn cancel(&mut self, id: TimerId) {
            if let Some(timer) = self.scheduled.iter_mut().find(|timer| timer.id == id) {
                timer.cancelled = true;
            }
        }
    }
}
