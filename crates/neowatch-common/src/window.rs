//! Query window handling for feed requests.
//!
//! The NeoWs feed endpoint rejects windows wider than seven days, so a
//! requested window is clamped to that ceiling before any request goes
//! out. Ordering (`start <= end`) is validated by the caller.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Maximum date span the upstream feed endpoint accepts in one request.
pub const MAX_FEED_SPAN_DAYS: i64 = 7;

/// The `[start, end]` date range a feed query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl QueryWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Clamp the window to at most `max_days`. Returns the (possibly
    /// adjusted) window and whether clamping occurred.
    pub fn clamp_span(self, max_days: i64) -> (QueryWindow, bool) {
        if (self.end - self.start).num_days() > max_days {
            let clamped = QueryWindow {
                start: self.start,
                end: self.start + Duration::days(max_days),
            };
            (clamped, true)
        } else {
            (self, false)
        }
    }

    /// Clamp to the upstream feed ceiling.
    pub fn clamped(self) -> (QueryWindow, bool) {
        self.clamp_span(MAX_FEED_SPAN_DAYS)
    }

    /// Span in whole days.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
