// SPDX-License-Identifier: MPL-2.0
//! Compact relative age labels ("3h", "2d") shown next to a story owner.

use chrono::{DateTime, Utc};

/// Formats how long ago `created_at` was, relative to `now`.
///
/// Uses the largest whole unit: days, then hours, then minutes. Anything
/// under a minute (or in the future) reads "Just now".
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use story_lens::story::age::format_age;
///
/// let now = Utc::now();
/// assert_eq!(format_age(now - Duration::minutes(90), now), "1h");
/// assert_eq!(format_age(now, now), "Just now");
/// ```
#[must_use]
pub fn format_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(created_at);
    let days = age.num_days();
    let hours = age.num_hours();
    let minutes = age.num_minutes();

    if days > 0 {
        format!("{days}d")
    } else if hours > 0 {
        format!("{hours}h")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        "Just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn picks_largest_whole_unit() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::days(3), now), "3d");
        assert_eq!(format_age(now - Duration::hours(23), now), "23h");
        assert_eq!(format_age(now - Duration::minutes(59), now), "59m");
        assert_eq!(format_age(now - Duration::seconds(59), now), "Just now");
    }

    #[test]
    fn floors_partial_units() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::hours(47), now), "1d");
        assert_eq!(format_age(now - Duration::seconds(119), now), "1m");
    }

    #[test]
    fn future_timestamps_read_just_now() {
        let now = Utc::now();
        assert_eq!(format_age(now + Duration::hours(2), now), "Just now");
    }
}
