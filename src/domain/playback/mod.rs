// SPDX-License-Identifier: MPL-2.0
//! Story playback domain types.
//!
//! This module contains the playback state machine and the timing value
//! objects it runs on, independent of any scheduling or presentation concern.

pub mod newtypes;
pub mod state;

// Re-export commonly used types
pub use newtypes::{EdgeZoneFraction, SegmentDuration, TickInterval};
pub use state::PlaybackState;
