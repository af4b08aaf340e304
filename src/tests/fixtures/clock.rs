// Clocks for zones whose offset changes, the way a daylight-saving transition does.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};

use crate::shared::core::clock::Clock;

/// Offset `before` until the local wall time `switch_at` (read in `before`), `after` from then on.
pub struct ShiftingClock {
    now: DateTime<Utc>,
    switch_at: NaiveDateTime,
    before: FixedOffset,
    after: FixedOffset,
}

impl ShiftingClock {
    pub fn new(now: DateTime<Utc>, switch_at: &str, (before, after): (i32, i32)) -> Self {
        Self {
            now,
            switch_at: NaiveDateTime::parse_from_str(switch_at, "%Y-%m-%dT%H:%M:%S")
                .unwrap_or_else(|err| panic!("bad fixture wall time {switch_at}: {err}")),
            before: FixedOffset::east_opt(before * 3600).unwrap(),
            after: FixedOffset::east_opt(after * 3600).unwrap(),
        }
    }

    fn switch_instant(&self) -> DateTime<Utc> {
        (self.switch_at - TimeDelta::seconds(i64::from(self.before.local_minus_utc()))).and_utc()
    }
}

impl Clock for ShiftingClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let offset = if self.now < self.switch_instant() {
            self.before
        } else {
            self.after
        };
        self.now.with_timezone(&offset)
    }

    fn local_to_utc(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        let skipped = TimeDelta::seconds(i64::from(
            self.after.local_minus_utc() - self.before.local_minus_utc(),
        ));
        let offset = if local < self.switch_at {
            self.before
        } else if local < self.switch_at + skipped {
            return None;
        } else {
            self.after
        };
        local
            .and_local_timezone(offset)
            .single()
            .map(|instant| instant.to_utc())
    }
}

/// America/New_York around 2024-03-10, when 02:00 EST jumps to 03:00 EDT.
pub fn new_york_spring_2024(now: DateTime<Utc>) -> ShiftingClock {
    ShiftingClock::new(now, "2024-03-10T02:00:00", (-5, -4))
}
