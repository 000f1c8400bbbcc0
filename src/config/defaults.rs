// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Segment**: How long one story stays on screen
//! - **Progress**: Sampling interval of the progress indicator
//! - **Touch Zones**: Width of the edge tap zones
//! - **Activity Log**: Capacity of the per-session event log

// ==========================================================================
// Segment Defaults
// ==========================================================================

/// Default display time of one story (in milliseconds).
pub const DEFAULT_SEGMENT_DURATION_MS: u64 = 5_000;

/// Minimum segment duration (in milliseconds).
pub const MIN_SEGMENT_DURATION_MS: u64 = 1_000;

/// Maximum segment duration (in milliseconds).
pub const MAX_SEGMENT_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Progress Defaults
// ==========================================================================

/// Default progress sampler interval (in milliseconds).
pub const DEFAULT_PROGRESS_TICK_MS: u64 = 50;

/// Minimum progress sampler interval, roughly one frame at 60 Hz.
pub const MIN_PROGRESS_TICK_MS: u64 = 16;

/// Maximum progress sampler interval (in milliseconds).
pub const MAX_PROGRESS_TICK_MS: u64 = 1_000;

// ==========================================================================
// Touch Zone Defaults
// ==========================================================================

/// Default width of each edge tap zone, as a percentage of viewer width.
pub const DEFAULT_EDGE_ZONE_PERCENT: f32 = 40.0;

/// Minimum edge zone width percentage.
pub const MIN_EDGE_ZONE_PERCENT: f32 = 10.0;

/// Maximum edge zone width percentage. At 50% the middle zone disappears.
pub const MAX_EDGE_ZONE_PERCENT: f32 = 50.0;

// ==========================================================================
// Activity Log Defaults
// ==========================================================================

/// Default number of session events retained by the activity log.
pub const DEFAULT_ACTIVITY_LOG_CAPACITY: usize = 256;

/// Minimum activity log capacity.
pub const MIN_ACTIVITY_LOG_CAPACITY: usize = 16;

/// Maximum activity log capacity.
pub const MAX_ACTIVITY_LOG_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SEGMENT_DURATION_MS > 0);
    assert!(MAX_SEGMENT_DURATION_MS >= MIN_SEGMENT_DURATION_MS);
    assert!(DEFAULT_SEGMENT_DURATION_MS >= MIN_SEGMENT_DURATION_MS);
    assert!(DEFAULT_SEGMENT_DURATION_MS <= MAX_SEGMENT_DURATION_MS);

    assert!(MIN_PROGRESS_TICK_MS > 0);
    assert!(MAX_PROGRESS_TICK_MS >= MIN_PROGRESS_TICK_MS);
    assert!(DEFAULT_PROGRESS_TICK_MS >= MIN_PROGRESS_TICK_MS);
    assert!(DEFAULT_PROGRESS_TICK_MS <= MAX_PROGRESS_TICK_MS);
    // The sampler must fire several times per segment.
    assert!(MAX_PROGRESS_TICK_MS < MIN_SEGMENT_DURATION_MS * 2);

    assert!(MIN_EDGE_ZONE_PERCENT > 0.0);
    assert!(MAX_EDGE_ZONE_PERCENT <= 50.0);
    assert!(DEFAULT_EDGE_ZONE_PERCENT >= MIN_EDGE_ZONE_PERCENT);
    assert!(DEFAULT_EDGE_ZONE_PERCENT <= MAX_EDGE_ZONE_PERCENT);

    assert!(MIN_ACTIVITY_LOG_CAPACITY > 0);
    assert!(MAX_ACTIVITY_LOG_CAPACITY >= MIN_ACTIVITY_LOG_CAPACITY);
    assert!(DEFAULT_ACTIVITY_LOG_CAPACITY >= MIN_ACTIVITY_LOG_CAPACITY);
    assert!(DEFAULT_ACTIVITY_LOG_CAPACITY <= MAX_ACTIVITY_LOG_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_defaults_are_valid() {
        assert_eq!(DEFAULT_SEGMENT_DURATION_MS, 5_000);
        assert!(DEFAULT_SEGMENT_DURATION_MS >= MIN_SEGMENT_DURATION_MS);
        assert!(DEFAULT_SEGMENT_DURATION_MS <= MAX_SEGMENT_DURATION_MS);
    }

    #[test]
    fn progress_defaults_are_valid() {
        assert_eq!(DEFAULT_PROGRESS_TICK_MS, 50);
        assert!(DEFAULT_PROGRESS_TICK_MS >= MIN_PROGRESS_TICK_MS);
        assert!(DEFAULT_PROGRESS_TICK_MS <= MAX_PROGRESS_TICK_MS);
    }

    #[test]
    fn edge_zone_defaults_leave_a_middle_zone() {
        assert_eq!(DEFAULT_EDGE_ZONE_PERCENT, 40.0);
        assert!(DEFAULT_EDGE_ZONE_PERCENT * 2.0 < 100.0);
    }

    #[test]
    fn activity_log_defaults_are_valid() {
        assert_eq!(DEFAULT_ACTIVITY_LOG_CAPACITY, 256);
        assert!(DEFAULT_ACTIVITY_LOG_CAPACITY >= MIN_ACTIVITY_LOG_CAPACITY);
    }
}
