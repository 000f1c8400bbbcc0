// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! Type-safe wrappers for the timing and layout values the viewer runs on,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_EDGE_ZONE_PERCENT, DEFAULT_PROGRESS_TICK_MS, DEFAULT_SEGMENT_DURATION_MS,
    MAX_EDGE_ZONE_PERCENT, MAX_PROGRESS_TICK_MS, MAX_SEGMENT_DURATION_MS, MIN_EDGE_ZONE_PERCENT,
    MIN_PROGRESS_TICK_MS, MIN_SEGMENT_DURATION_MS,
};
use std::time::Duration;

// =============================================================================
// SegmentDuration
// =============================================================================

/// Display time of a single story, in milliseconds.
///
/// Guaranteed to be within 1–60 seconds.
///
/// # Example
///
/// ```
/// use story_lens::domain::playback::SegmentDuration;
///
/// let duration = SegmentDuration::new(5_000);
/// assert_eq!(duration.as_millis(), 5_000);
///
/// // Values outside range are clamped
/// assert_eq!(SegmentDuration::new(10).as_millis(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentDuration(u64);

impl SegmentDuration {
    /// Creates a new segment duration, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_SEGMENT_DURATION_MS, MAX_SEGMENT_DURATION_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SegmentDuration {
    fn default() -> Self {
        Self(DEFAULT_SEGMENT_DURATION_MS)
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Interval of the progress sampler, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new tick interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_PROGRESS_TICK_MS, MAX_PROGRESS_TICK_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(DEFAULT_PROGRESS_TICK_MS)
    }
}

// =============================================================================
// EdgeZoneFraction
// =============================================================================

/// Width of each edge tap zone as a fraction of the viewer width.
///
/// Always within 0.1–0.5. The middle zone covers what remains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeZoneFraction(f32);

impl EdgeZoneFraction {
    /// Creates an edge fraction from a percentage, clamping to valid range.
    #[must_use]
    pub fn from_percent(percent: f32) -> Self {
        let percent = if percent.is_nan() {
            DEFAULT_EDGE_ZONE_PERCENT
        } else {
            percent
        };
        Self(percent.clamp(MIN_EDGE_ZONE_PERCENT, MAX_EDGE_ZONE_PERCENT) / 100.0)
    }

    /// Returns the fraction (0.1–0.5).
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the value as a percentage.
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }
}

impl Default for EdgeZoneFraction {
    fn default() -> Self {
        Self(DEFAULT_EDGE_ZONE_PERCENT / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn segment_duration_clamps() {
        assert_eq!(SegmentDuration::new(0).as_millis(), MIN_SEGMENT_DURATION_MS);
        assert_eq!(
            SegmentDuration::new(u64::MAX).as_millis(),
            MAX_SEGMENT_DURATION_MS
        );
        assert_eq!(SegmentDuration::new(7_500).as_millis(), 7_500);
    }

    #[test]
    fn segment_duration_default_is_five_seconds() {
        assert_eq!(
            SegmentDuration::default().as_duration(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn tick_interval_clamps() {
        assert_eq!(TickInterval::new(1).as_millis(), MIN_PROGRESS_TICK_MS);
        assert_eq!(TickInterval::new(5_000).as_millis(), MAX_PROGRESS_TICK_MS);
        assert_eq!(TickInterval::default().as_millis(), 50);
    }

    #[test]
    fn edge_zone_converts_percent() {
        assert_abs_diff_eq!(EdgeZoneFraction::from_percent(40.0).value(), 0.4);
        assert_abs_diff_eq!(EdgeZoneFraction::from_percent(90.0).value(), 0.5);
        assert_abs_diff_eq!(EdgeZoneFraction::from_percent(1.0).value(), 0.1);
    }

    #[test]
    fn edge_zone_nan_falls_back_to_default() {
        assert_eq!(
            EdgeZoneFraction::from_percent(f32::NAN),
            EdgeZoneFraction::default()
        );
    }
}
