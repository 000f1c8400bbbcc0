// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core playback rules with no external crate dependencies.
//!
//! This module contains pure domain types and value objects. It depends only
//! on `std` so the state machine can be tested without a runtime.
//!
//! # Modules
//!
//! - [`playback`]: Playback types ([`PlaybackState`](playback::PlaybackState),
//!   [`SegmentDuration`](playback::SegmentDuration),
//!   [`TickInterval`](playback::TickInterval),
//!   [`EdgeZoneFraction`](playback::EdgeZoneFraction))

pub mod playback;
