// SPDX-License-Identifier: MPL-2.0
//! Input handling for the story viewer.
//!
//! Directional buttons, edge taps and the keyboard are alternative front-ends
//! to the same small command set. The resolver never touches playback state;
//! it hands [`ViewerCommand`]s to the
//! [`PlaybackController`](crate::playback::PlaybackController).

pub mod keys;
pub mod resolver;
pub mod zone;

pub use keys::{Key, KeyPress, RepeatDetection, RepeatFilter};
pub use resolver::{Direction, NavigationResolver, ViewerCommand, ViewerInput};
pub use zone::{TouchZone, ViewerBounds};
