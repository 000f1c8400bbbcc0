// SPDX-License-Identifier: MPL-2.0
//! Maps raw viewer input to playback commands.

use super::keys::{Key, KeyPress, RepeatDetection, RepeatFilter};
use super::zone::{TouchZone, ViewerBounds};
use crate::domain::playback::EdgeZoneFraction;

/// Explicit direction, e.g. from on-screen arrow buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Raw input the viewer receives from its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerInput {
    Direction(Direction),
    /// A pointer or touch was released at horizontal position `x`.
    PointerRelease { x: f32, bounds: ViewerBounds },
    KeyDown(KeyPress),
    KeyUp(Key),
    PauseButton,
    /// Close button in the header, or a click on the backdrop.
    CloseButton,
}

/// Commands understood by the playback controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Previous,
    Next,
    Close,
    TogglePause,
}

impl From<Direction> for ViewerCommand {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Previous => ViewerCommand::Previous,
            Direction::Next => ViewerCommand::Next,
        }
    }
}

/// Translates [`ViewerInput`] into [`ViewerCommand`]s.
///
/// Holds no playback state; the only thing it remembers is which keys are
/// held, so auto-repeat cannot skip through stories.
#[derive(Debug, Clone, Default)]
pub struct NavigationResolver {
    edge: EdgeZoneFraction,
    keys: RepeatFilter,
}

impl NavigationResolver {
    #[must_use]
    pub fn new(edge: EdgeZoneFraction) -> Self {
        Self {
            edge,
            keys: RepeatFilter::default(),
        }
    }

    /// Same as [`NavigationResolver::new`] for a host that detects repeats
    /// differently.
    #[must_use]
    pub fn with_repeat_detection(edge: EdgeZoneFraction, detection: RepeatDetection) -> Self {
        Self {
            edge,
            keys: RepeatFilter::new(detection),
        }
    }

    /// Resolves one input. Returns `None` for input that maps to nothing.
    pub fn resolve(&mut self, input: ViewerInput) -> Option<ViewerCommand> {
        match input {
            ViewerInput::Direction(direction) => Some(direction.into()),
            ViewerInput::PointerRelease { x, bounds } => {
                match TouchZone::classify(x, bounds, self.edge)? {
                    TouchZone::Left => Some(ViewerCommand::Previous),
                    TouchZone::Right => Some(ViewerCommand::Next),
                    TouchZone::Middle => None,
                }
            }
            ViewerInput::KeyDown(press) => match self.keys.key_down(press)? {
                Key::ArrowLeft => Some(ViewerCommand::Previous),
                Key::ArrowRight => Some(ViewerCommand::Next),
                Key::Escape => Some(ViewerCommand::Close),
                Key::Other => None,
            },
            ViewerInput::KeyUp(key) => {
                self.keys.key_up(key);
                None
            }
            ViewerInput::PauseButton => Some(ViewerCommand::TogglePause),
            ViewerInput::CloseButton => Some(ViewerCommand::Close),
        }
    }

    /// Forgets held keys, e.g. when the viewer loses focus.
    pub fn reset(&mut self) {
        self.keys.reset();
    }
}
