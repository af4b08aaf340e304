use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::equipment::core::records::UtilizationEvent;
use crate::modules::equipment::core::utilization::{BaselinePolicy, utilization_percentage};
use crate::modules::equipment::core::window::weekly_windows;
use crate::shared::core::clock::Clock;
use crate::shared::core::rounding::round2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyUtilization {
    pub date: NaiveDate,
    pub utilization_percentage: f64,
}

/// Per-day utilization for the trailing week, oldest first. Each day is filtered and
/// aggregated on its own and measured against the same baseline as the default day.
pub fn weekly_trend(
    events: &[UtilizationEvent],
    policy: &BaselinePolicy,
    clock: &dyn Clock,
) -> Vec<DailyUtilization> {
    weekly_windows(clock)
        .into_iter()
        .map(|(date, window)| {
            let in_day = window.filter(events);
            let baseline = policy.baseline_hours(None);
            DailyUtilization {
                date,
                utilization_percentage: round2(utilization_percentage(&in_day, baseline)),
            }
        })
        .collect()
}
