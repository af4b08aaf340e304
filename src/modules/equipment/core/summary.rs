// Enrichment: equipment metadata joined with windowed utilization and power metrics.
//
// Purpose
// - Build the per-equipment read model served to dashboards, detail pages and the map.
//
// Responsibilities
// - Filter utilization and power records to the reporting window (today by default).
// - Derive hours, percentage, idle hours, activity state, current and average power.
// - Pick the latest location from all locations; locations are not windowed.
// - Round numbers once, here, on the way out.
//
// Boundaries
// - Pure. Fetching happens in the use case handlers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::equipment::core::intervals::{aggregate_active_hours, last_state};
use crate::modules::equipment::core::records::{
    Equipment, EquipmentId, EquipmentRecords, LocationRecord, PowerRecord, latest,
};
use crate::modules::equipment::core::utilization::{BaselinePolicy, percentage_of_baseline};
use crate::modules::equipment::core::window::DateWindow;
use crate::shared::core::clock::Clock;
use crate::shared::core::rounding::round2;

const FALLBACK_TEXT: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentSummary {
    pub equipment_id: EquipmentId,
    pub equipment_name: String,
    pub owner: String,
    pub expected_location: String,
    pub utilization_percentage: f64,
    pub utilization_hours: f64,
    pub idle_hours: f64,
    pub baseline_hours: f64,
    pub power_consumption: f64,
    pub avg_power: f64,
    pub is_active: bool,
    pub latest_location: Option<LocationRecord>,
    pub updated_at: DateTime<Utc>,
}

/// Dashboard row: the summary without the location payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationOverview {
    pub equipment_id: EquipmentId,
    pub equipment_name: String,
    pub owner: String,
    pub expected_location: String,
    pub utilization_percentage: f64,
    pub utilization_hours: f64,
    pub idle_hours: f64,
    pub power_consumption: f64,
    pub avg_power: f64,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<EquipmentSummary> for UtilizationOverview {
    fn from(summary: EquipmentSummary) -> Self {
        Self {
            equipment_id: summary.equipment_id,
            equipment_name: summary.equipment_name,
            owner: summary.owner,
            expected_location: summary.expected_location,
            utilization_percentage: summary.utilization_percentage,
            utilization_hours: summary.utilization_hours,
            idle_hours: summary.idle_hours,
            power_consumption: summary.power_consumption,
            avg_power: summary.avg_power,
            is_active: summary.is_active,
            updated_at: summary.updated_at,
        }
    }
}

pub fn enrich(
    equipment: &Equipment,
    records: &EquipmentRecords,
    range: Option<DateWindow>,
    policy: &BaselinePolicy,
    clock: &dyn Clock,
) -> EquipmentSummary {
    let window = range.unwrap_or_else(|| DateWindow::today(clock));

    let utilization = window.filter(&records.utilization);
    let baseline_hours = policy.baseline_hours(range.as_ref());
    let utilization_hours = aggregate_active_hours(&utilization);
    let utilization_percentage = percentage_of_baseline(utilization_hours, baseline_hours);
    let is_active = last_state(&utilization).unwrap_or(false);

    let power = window.filter(&records.power);
    let latest_power = latest(&power);

    EquipmentSummary {
        equipment_id: equipment.equipment_id,
        equipment_name: equipment
            .equipment_name
            .clone()
            .unwrap_or_else(|| format!("Equipment {}", equipment.equipment_id)),
        owner: text_or_fallback(equipment.owner.as_deref()),
        expected_location: text_or_fallback(equipment.expected_location.as_deref()),
        utilization_percentage: round2(utilization_percentage),
        utilization_hours: round2(utilization_hours),
        idle_hours: round2((baseline_hours - utilization_hours).max(0.0)),
        baseline_hours: round2(baseline_hours),
        power_consumption: round2(
            latest_power
                .and_then(|record| record.consumption)
                .unwrap_or(0.0),
        ),
        avg_power: round2(average_consumption(&power)),
        is_active,
        latest_location: latest(&records.locations).cloned(),
        updated_at: latest_power
            .map(|record| record.created_at)
            .unwrap_or_else(|| clock.now().to_utc()),
    }
}

/// Mean of the readings present; records without a reading are skipped.
pub fn average_consumption(records: &[PowerRecord]) -> f64 {
    let readings: Vec<f64> = records.iter().filter_map(|r| r.consumption).collect();
    if readings.is_empty() {
        return 0.0;
    }
    readings.iter().sum::<f64>() / readings.len() as f64
}

fn text_or_fallback(value: Option<&str>) -> String {
    value.unwrap_or(FALLBACK_TEXT).to_string()
}
