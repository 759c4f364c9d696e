//! Daily like-quota ("bolt") arithmetic.
//!
//! A bolt is one unit of daily like budget. The remaining count is always a
//! derived value — `max(0, MAX_BOLTS_PER_DAY - likes since start of day)` —
//! recomputed at every observation and never cached, so it resets on the next
//! day-boundary crossing without any stored state.
//!
//! The original client computed the day start from the device's local calendar
//! date while calling it UTC. The boundary is a typed policy here so call
//! sites state which one they mean.

use chrono::{DateTime, FixedOffset, NaiveTime, Utc};

/// Fixed daily like cap, not configurable per user.
pub const MAX_BOLTS_PER_DAY: u32 = 5;

/// Policy for where a "day" begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBoundary {
    /// Days roll over at UTC midnight.
    #[default]
    Utc,
    /// Days roll over at midnight in a fixed offset, reproducing a device's
    /// local-calendar behavior.
    Offset(FixedOffset),
}

impl DayBoundary {
    /// Returns the instant the current day started, given `now`.
    pub fn start_of_day(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            DayBoundary::Utc => {
                let midnight = now.date_naive().and_time(NaiveTime::MIN);
                DateTime::from_naive_utc_and_offset(midnight, Utc)
            }
            DayBoundary::Offset(offset) => {
                let local_midnight = now.with_timezone(offset).date_naive().and_time(NaiveTime::MIN);
                // Local midnight expressed back on the UTC timeline.
                DateTime::from_naive_utc_and_offset(local_midnight - *offset, Utc)
            }
        }
    }
}

/// A wallet's bolt usage for the current day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoltStatus {
    pub bolts_used: u32,
    pub bolts_remaining: u32,
}

impl BoltStatus {
    /// Derives the status from the number of likes recorded since the start
    /// of the current day.
    pub fn from_used(bolts_used: u32) -> Self {
        Self {
            bolts_used,
            bolts_remaining: MAX_BOLTS_PER_DAY.saturating_sub(bolts_used),
        }
    }

    pub fn has_bolts_remaining(&self) -> bool {
        self.bolts_remaining > 0
    }
}
