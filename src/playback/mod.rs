// SPDX-License-Identifier: MPL-2.0
//! Story playback: segment timing, progress and the controller tying them to
//! navigation.
//!
//! # Architecture
//!
//! - [`PlaybackController`]: position, state machine and timer ownership
//! - [`timer`]: the deadline and sampler timers with their generation guard
//! - [`progress`]: pure progress computation for the bars

pub mod controller;
pub mod progress;
pub mod timer;

pub use controller::{CloseReason, MoveCause, PlaybackController, Signal};
pub use progress::{sample_progress, GroupProgress};
pub use timer::{Generation, TimerEvent, TimerId, TimerScheduler, TokioScheduler};
