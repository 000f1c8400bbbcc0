// SPDX-License-Identifier: MPL-2.0
//! Tap zones of the viewer surface.
//!
//! The surface is split horizontally: a left edge zone, a right edge zone of
//! the same width, and whatever remains in the middle.

use crate::domain::playback::EdgeZoneFraction;

/// On-screen rectangle of the viewer, in the same coordinate space as
/// pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewerBounds {
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Horizontal zone a pointer release landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchZone {
    Left,
    Middle,
    Right,
}

impl TouchZone {
    /// Classifies a release at horizontal position `x`.
    ///
    /// Positions exactly on a zone boundary belong to the middle zone.
    /// Returns `None` for a degenerate surface or a non-finite position.
    #[must_use]
    pub fn classify(x: f32, bounds: ViewerBounds, edge: EdgeZoneFraction) -> Option<Self> {
        if !x.is_finite() || !bounds.width.is_finite() || bounds.width <= 0.0 {
            return None;
        }

        let offset = x - bounds.left;
        let left_edge = bounds.width * edge.value();
        let right_edge = bounds.width * (1.0 - edge.value());

        if offset < left_edge {
            Some(TouchZone::Left)
        } else if offset > right_edge {
            Some(TouchZone::Right)
        } else {
            Some(TouchZone::Middle)
        }
    }
}
