// Active-duration aggregation over a noisy on/off event series.
//
// Rules
// - Events are stable-sorted by creation time; the store's order is never trusted.
// - Consecutive active events form one run starting at the first of them.
// - A run ends at the next inactive event, which is consumed with the run.
// - A run with no inactive event after it ends at its own last active event, so an
//   ongoing session only counts up to its latest report.
// - Inactive events outside a run contribute nothing.

use chrono::{DateTime, Utc};

use crate::modules::equipment::core::records::UtilizationEvent;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Total active time in hours. Zero for an empty series.
pub fn aggregate_active_hours(events: &[UtilizationEvent]) -> f64 {
    active_runs(events)
        .into_iter()
        .map(|(start, end)| hours_between(start, end))
        .sum()
}

/// Start and end instants of every active run, in chronological order.
pub fn active_runs(events: &[UtilizationEvent]) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let sorted = sorted_chronologically(events);
    let mut runs = Vec::new();
    let mut i = 0;

    while i < sorted.len() {
        if !sorted[i].is_active {
            i += 1;
            continue;
        }

        let start = sorted[i].created_at;
        let mut j = i + 1;
        while j < sorted.len() && sorted[j].is_active {
            j += 1;
        }

        if j < sorted.len() {
            runs.push((start, sorted[j].created_at));
            i = j + 1;
        } else {
            runs.push((start, sorted[j - 1].created_at));
            i = j;
        }
    }

    runs
}

/// The flag of the chronologically last event, if any.
pub fn last_state(events: &[UtilizationEvent]) -> Option<bool> {
    sorted_chronologically(events)
        .last()
        .map(|event| event.is_active)
}

fn sorted_chronologically(events: &[UtilizationEvent]) -> Vec<&UtilizationEvent> {
    let mut sorted: Vec<&UtilizationEvent> = events.iter().collect();
    sorted.sort_by_key(|event| event.created_at);
    sorted
}

// Whole seconds only, matching a days/hours/minutes/seconds breakdown of the interval.
fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let seconds = (end - start).num_seconds().max(0);
    seconds as f64 / SECONDS_PER_HOUR
}
