// SPDX-License-Identifier: MPL-2.0
//! Progress fraction of the current segment and the per-group bar fills.

use crate::domain::playback::SegmentDuration;
use std::time::{Duration, Instant};

/// Fraction of the segment elapsed at `now`, excluding paused time.
///
/// Pure function of its inputs, clamped to `[0, 1]`.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use story_lens::domain::playback::SegmentDuration;
/// use story_lens::playback::progress::sample_progress;
///
/// let start = Instant::now();
/// let duration = SegmentDuration::new(5_000);
/// assert_eq!(sample_progress(start, start, Duration::ZERO, duration), 0.0);
///
/// let later = start + Duration::from_millis(3_000);
/// let fraction = sample_progress(later, start, Duration::from_millis(500), duration);
/// assert!((fraction - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn sample_progress(
    now: Instant,
    started_at: Instant,
    paused_total: Duration,
    duration: SegmentDuration,
) -> f32 {
    let counted = now
        .saturating_duration_since(started_at)
        .saturating_sub(paused_total);
    fraction_of(counted, duration)
}

/// Converts counted segment time to a clamped fraction of `duration`.
#[must_use]
pub fn fraction_of(counted: Duration, duration: SegmentDuration) -> f32 {
    let total = duration.as_duration().as_secs_f64();
    #[allow(clippy::cast_possible_truncation)] // fraction is within [0, 1]
    let fraction = (counted.as_secs_f64() / total).clamp(0.0, 1.0) as f32;
    fraction
}

/// Fill level of every progress bar of the current owner's group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupProgress {
    /// One entry per story in the group: 1.0 before the active story,
    /// the live fraction for it, 0.0 after it.
    pub fills: Vec<f32>,
    /// Position of the active story within the group.
    pub active: usize,
    /// Whether the active segment is paused.
    pub paused: bool,
}

impl GroupProgress {
    /// Builds the bar fills for `count` stories with `active` showing `fraction`.
    #[must_use]
    pub fn new(count: usize, active: usize, fraction: f32, paused: bool) -> Self {
        let fills = (0..count)
            .map(|position| match position.cmp(&active) {
                std::cmp::Ordering::Less => 1.0,
                std::cmp::Ordering::Equal => fraction.clamp(0.0, 1.0),
                std::cmp::Ordering::Greater => 0.0,
            })
            .collect();
        Self {
            fills,
            active,
            paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn five_seconds() -> SegmentDuration {
        SegmentDuration::new(5_000)
    }

    #[test]
    fn starts_at_zero() {
        let t0 = Instant::now();
        assert_abs_diff_eq!(sample_progress(t0, t0, Duration::ZERO, five_seconds()), 0.0);
    }

    #[test]
    fn never_exceeds_one() {
        let t0 = Instant::now();
        let late = t0 + Duration::from_secs(30);
        assert_abs_diff_eq!(
            sample_progress(late, t0, Duration::ZERO, five_seconds()),
            1.0
        );
    }

    #[test]
    fn subtracts_paused_time() {
        let t0 = Instant::now();
        let now = t0 + Duration::from_millis(2_000);
        assert_abs_diff_eq!(
            sample_progress(now, t0, Duration::from_millis(1_500), five_seconds()),
            0.1,
            epsilon = 1e-6
        );
    }

    #[test]
    fn pause_longer_than_elapsed_clamps_to_zero() {
        let t0 = Instant::now();
        let now = t0 + Duration::from_millis(100);
        assert_abs_diff_eq!(
            sample_progress(now, t0, Duration::from_secs(1), five_seconds()),
            0.0
        );
    }

    #[test]
    fn is_monotonic_while_counting() {
        let t0 = Instant::now();
        let mut last = 0.0;
        for step in 0..=120 {
            let now = t0 + Duration::from_millis(step * 50);
            let fraction = sample_progress(now, t0, Duration::ZERO, five_seconds());
            assert!(fraction >= last);
            last = fraction;
        }
        assert_abs_diff_eq!(last, 1.0);
    }

    #[test]
    fn group_fills_complete_active_upcoming() {
        let progress = GroupProgress::new(4, 2, 0.25, false);
        assert_eq!(progress.fills, vec![1.0, 1.0, 0.25, 0.0]);
        assert_eq!(progress.active, 2);
    }

    #[test]
    fn group_fills_clamp_fraction() {
        let progress = GroupProgress::new(1, 0, 3.0, true);
        assert_eq!(progress.fills, vec![1.0]);
        assert!(progress.paused);
    }
}
