// Half-open reporting windows and record filtering.
//
// Responsibilities
// - Keep records with `start <= created_at < end`.
// - Resolve the default window to the current server-local day.
// - Split the trailing week, today included, into daily windows.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::Serialize;

use crate::modules::equipment::core::records::Timestamped;
use crate::shared::core::clock::Clock;

pub const TREND_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The calendar day `date` in server-local time. Days around a DST change are
    /// 23 or 25 hours long.
    pub fn day(clock: &dyn Clock, date: NaiveDate) -> Self {
        let start = clock.start_of_day(date);
        let end = date
            .succ_opt()
            .map_or(start + TimeDelta::days(1), |next| clock.start_of_day(next));
        Self::new(start, end)
    }

    pub fn today(clock: &dyn Clock) -> Self {
        Self::day(clock, clock.today())
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn filter<T: Timestamped + Clone>(&self, records: &[T]) -> Vec<T> {
        records
            .iter()
            .filter(|record| self.contains(record.created_at()))
            .cloned()
            .collect()
    }
}

/// Daily windows for the last `TREND_DAYS` days including today, oldest first.
pub fn weekly_windows(clock: &dyn Clock) -> Vec<(NaiveDate, DateWindow)> {
    let today = clock.today();
    (0..TREND_DAYS)
        .rev()
        .filter_map(|days_back| today.checked_sub_days(chrono::Days::new(u64::from(days_back))))
        .map(|date| (date, DateWindow::day(clock, date)))
        .collect()
}
