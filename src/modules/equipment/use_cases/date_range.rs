use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::equipment::core::window::DateWindow;
use crate::modules::equipment::use_cases::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use crate::shared::core::timestamp::parse_timestamp;

/// `start_date` / `end_date` as received from a caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRangeParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRangeParams {
    pub fn new(start_date: Option<String>, end_date: Option<String>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// `None` when both bounds are absent (the caller then reports on today).
    /// Values without an offset are server-local wall times, resolved through `clock`.
    pub fn resolve(&self, clock: &dyn Clock) -> Result<Option<DateWindow>, ApplicationError> {
        let start = non_blank(self.start_date.as_deref());
        let end = non_blank(self.end_date.as_deref());

        match (start, end) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => {
                let window = DateWindow::new(parse(start, clock)?, parse(end, clock)?);
                if window.end <= window.start {
                    return Err(ApplicationError::MalformedInput(format!(
                        "end_date {end} must be after start_date {start}"
                    )));
                }
                Ok(Some(window))
            }
            _ => Err(ApplicationError::MalformedInput(
                "start_date and end_date must be given together".into(),
            )),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse(raw: &str, clock: &dyn Clock) -> Result<DateTime<Utc>, ApplicationError> {
    parse_timestamp(raw, clock)
        .ok_or_else(|| ApplicationError::MalformedInput(format!("invalid date: {raw}")))
}
