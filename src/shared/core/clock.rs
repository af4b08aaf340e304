// Source of "now" for everything that defaults to the current day.
//
// Purpose
// - Keep wall-clock reads out of the calculation code so tests can pin an instant.
//
// Responsibilities
// - Report the current instant.
// - Resolve server-local wall times with the offset in force on their own date, so day
//   boundaries follow daylight-saving changes.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

// Zones that skip midnight on a DST change start the day at the first wall time that exists.
const MAX_DAY_START_GAP_HOURS: i64 = 3;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Resolve a server-local wall time. The earlier instant wins when the time repeats;
    /// `None` when the time is skipped.
    fn local_to_utc(&self, local: NaiveDateTime) -> Option<DateTime<Utc>>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Local midnight of `date`, resolved with the offset in force on that date.
    fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let midnight = date.and_time(NaiveTime::MIN);
        (0..=MAX_DAY_START_GAP_HOURS)
            .find_map(|hours| self.local_to_utc(midnight + TimeDelta::hours(hours)))
            .unwrap_or_else(|| {
                let offset = self.now().offset().local_minus_utc();
                (midnight - TimeDelta::seconds(i64::from(offset))).and_utc()
            })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn local_to_utc(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        local
            .and_local_timezone(Local)
            .earliest()
            .map(|instant| instant.to_utc())
    }
}

/// A pinned instant in a zone without DST: every date uses the instant's offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self(instant.fixed_offset())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }

    fn local_to_utc(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        local
            .and_local_timezone(*self.0.offset())
            .single()
            .map(|instant| instant.to_utc())
    }
}
