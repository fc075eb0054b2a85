//! Presentation status derived from a stored status plus a date range.
//!
//! Never persisted, never written back to the entity. The clock comes in as a
//! parameter so the computation stays pure and the date-boundary cases are testable.

use chrono::{DateTime, Utc};
use std::fmt;

/// Stored status values that short-circuit the date comparison.
const TERMINAL_MARKERS: &[&str] = &["inactive", "archived", "cancelled"];

/// The status a list or detail page displays for a date-ranged entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedStatus {
    Inactive,
    Upcoming,
    Active,
    Completed,
}

impl fmt::Display for DerivedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DerivedStatus::Inactive => "inactive",
            DerivedStatus::Upcoming => "upcoming",
            DerivedStatus::Active => "active",
            DerivedStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Derives the presentation status for an entity with a stored status and a
/// `[start, end]` range.
///
/// An explicit terminal marker in the stored status wins regardless of dates;
/// otherwise `now` before `start` is upcoming, after `end` is completed, and in
/// between is active.
pub fn derive_status(
    stored: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> DerivedStatus {
    if TERMINAL_MARKERS
        .iter()
        .any(|marker| stored.eq_ignore_ascii_case(marker))
    {
        return DerivedStatus::Inactive;
    }
    if now < start {
        DerivedStatus::Upcoming
    } else if now > end {
        DerivedStatus::Completed
    } else {
        DerivedStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn before_start_is_upcoming() {
        let status = derive_status("active", date(2025, 1, 1), date(2025, 6, 1), date(2024, 12, 1));
        assert_eq!(status, DerivedStatus::Upcoming);
    }

    #[test]
    fn within_range_is_active() {
        let status = derive_status("active", date(2025, 1, 1), date(2025, 6, 1), date(2025, 3, 1));
        assert_eq!(status, DerivedStatus::Active);
    }

    #[test]
    fn after_end_is_completed() {
        let status = derive_status("active", date(2025, 1, 1), date(2025, 6, 1), date(2025, 7, 1));
        assert_eq!(status, DerivedStatus::Completed);
    }

    #[test]
    fn terminal_marker_wins_regardless_of_dates() {
        for now in [date(2024, 12, 1), date(2025, 3, 1), date(2025, 7, 1)] {
            let status = derive_status("inactive", date(2025, 1, 1), date(2025, 6, 1), now);
            assert_eq!(status, DerivedStatus::Inactive);
        }
        let status = derive_status("Archived", date(2025, 1, 1), date(2025, 6, 1), date(2025, 3, 1));
        assert_eq!(status, DerivedStatus::Inactive);
    }

    #[test]
    fn boundary_instants_count_as_active() {
        let start = date(2025, 1, 1);
        let end = date(2025, 6, 1);
        assert_eq!(derive_status("active", start, end, start), DerivedStatus::Active);
        assert_eq!(derive_status("active", start, end, end), DerivedStatus::Active);
    }

    #[test]
    fn display_labels_are_lowercase() {
        assert_eq!(DerivedStatus::Upcoming.to_string(), "upcoming");
        assert_eq!(DerivedStatus::Completed.to_string(), "completed");
    }
}
