use crate::modules::equipment::core::intervals::aggregate_active_hours;
use crate::modules::equipment::core::records::UtilizationEvent;
use crate::modules::equipment::core::window::DateWindow;

const HOURS_PER_DAY: i64 = 24;

/// How many hours a reporting window is worth when turning active hours into a percentage.
///
/// Without an explicit range, for the default day and for each weekly trend day, the
/// denominator is `window_hours`. With a range it is the
/// range's whole days and leftover whole hours, each day (and the leftover) capped at
/// `cap_daily_hours` when set, e.g. an 8-hour shift per calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselinePolicy {
    pub window_hours: f64,
    pub cap_daily_hours: Option<f64>,
}

impl Default for BaselinePolicy {
    fn default() -> Self {
        Self {
            window_hours: 24.0,
            cap_daily_hours: None,
        }
    }
}

impl BaselinePolicy {
    pub fn baseline_hours(&self, range: Option<&DateWindow>) -> f64 {
        let Some(range) = range else {
            return self.window_hours;
        };

        let total_hours = (range.end - range.start).num_hours().max(0);
        let days = (total_hours / HOURS_PER_DAY) as f64;
        let hours = (total_hours % HOURS_PER_DAY) as f64;

        match self.cap_daily_hours {
            Some(cap) => days * cap.min(HOURS_PER_DAY as f64) + hours.min(cap),
            None => days * HOURS_PER_DAY as f64 + hours,
        }
    }
}

/// Active hours as a share of `baseline_hours`, clamped to `[0, 100]`.
pub fn percentage_of_baseline(active_hours: f64, baseline_hours: f64) -> f64 {
    if baseline_hours <= 0.0 {
        return 0.0;
    }
    (active_hours / baseline_hours * 100.0).clamp(0.0, 100.0)
}

pub fn utilization_percentage(events: &[UtilizationEvent], baseline_hours: f64) -> f64 {
    percentage_of_baseline(aggregate_active_hours(events), baseline_hours)
}

#[cfg(test)]
mod utilization_calculator_tests {
    use super::*;
    use crate::tests::fixtures::records::{event_at, utc_at};
    use rstest::{fixture, rstest};

    #[fixture]
    fn policy() -> BaselinePolicy {
        BaselinePolicy::default()
    }

    fn window(start: &str, end: &str) -> DateWindow {
        DateWindow::new(utc_at(start), utc_at(end))
    }

    #[rstest]
    fn it_should_use_the_default_window_without_a_range(policy: BaselinePolicy) {
        assert_eq!(policy.baseline_hours(None), 24.0);
        let shift = BaselinePolicy {
            window_hours: 8.0,
            cap_daily_hours: Some(8.0),
        };
        assert_eq!(shift.baseline_hours(None), 8.0);
    }

    #[rstest]
    #[case("2024-05-01T00:00:00Z", "2024-05-02T00:00:00Z", 24.0)]
    #[case("2024-05-01T00:00:00Z", "2024-05-08T00:00:00Z", 168.0)]
    #[case("2024-05-01T00:00:00Z", "2024-05-02T05:00:00Z", 29.0)]
    #[case("2024-05-01T08:00:00Z", "2024-05-01T10:59:59Z", 2.0)]
    fn it_should_count_whole_days_and_hours_of_a_range(
        policy: BaselinePolicy,
        #[case] start: &str,
        #[case] end: &str,
        #[case] expected: f64,
    ) {
        assert_eq!(policy.baseline_hours(Some(&window(start, end))), expected);
    }

    #[rstest]
    #[case("2024-05-01T00:00:00Z", "2024-05-03T00:00:00Z", 16.0)]
    #[case("2024-05-01T00:00:00Z", "2024-05-02T05:00:00Z", 13.0)]
    #[case("2024-05-01T00:00:00Z", "2024-05-02T12:00:00Z", 16.0)]
    fn it_should_cap_each_day_when_a_daily_cap_is_set(
        #[case] start: &str,
        #[case] end: &str,
        #[case] expected: f64,
    ) {
        let shift = BaselinePolicy {
            window_hours: 8.0,
            cap_daily_hours: Some(8.0),
        };
        assert_eq!(shift.baseline_hours(Some(&window(start, end))), expected);
    }

    #[rstest]
    fn it_should_clamp_over_long_activity_to_one_hundred() {
        assert_eq!(percentage_of_baseline(30.0, 24.0), 100.0);
        assert_eq!(percentage_of_baseline(1e12, 24.0), 100.0);
    }

    #[rstest]
    #[case(12.0, 24.0, 50.0)]
    #[case(2.0, 8.0, 25.0)]
    #[case(0.0, 24.0, 0.0)]
    #[case(5.0, 0.0, 0.0)]
    #[case(5.0, -1.0, 0.0)]
    fn it_should_compute_a_bounded_share(
        #[case] active: f64,
        #[case] baseline: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(percentage_of_baseline(active, baseline), expected);
    }

    #[rstest]
    fn it_should_derive_the_percentage_from_events() {
        let events = vec![
            event_at(true, "2024-05-01T08:00:00Z"),
            event_at(false, "2024-05-01T14:00:00Z"),
        ];
        assert_eq!(utilization_percentage(&events, 24.0), 25.0);
        assert_eq!(utilization_percentage(&[], 24.0), 0.0);
    }
}
