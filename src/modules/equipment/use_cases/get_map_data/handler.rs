// Map overlay data.
//
// Responsibilities
// - Fetch all locations once and group them per equipment.
// - Summarise each equipment for the current day.
// - Attach the full location trail and a seven-day utilization trend.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::modules::equipment::adapters::outbound::equipment_store::EquipmentStore;
use crate::modules::equipment::core::records::{EquipmentId, EquipmentRecords, LocationRecord};
use crate::modules::equipment::core::summary::{EquipmentSummary, enrich};
use crate::modules::equipment::core::trend::{DailyUtilization, weekly_trend};
use crate::modules::equipment::core::utilization::BaselinePolicy;
use crate::modules::equipment::use_cases::errors::ApplicationError;
use crate::shared::core::clock::Clock;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapEntry {
    #[serde(flatten)]
    pub summary: EquipmentSummary,
    pub locations: Vec<LocationRecord>,
    pub weekly_trend: Vec<DailyUtilization>,
}

pub struct GetMapDataHandler<TStore>
where
    TStore: EquipmentStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
    policy: BaselinePolicy,
}

impl<TStore> GetMapDataHandler<TStore>
where
    TStore: EquipmentStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>, policy: BaselinePolicy) -> Self {
        Self {
            store,
            clock,
            policy,
        }
    }

    pub async fn handle(&self) -> Result<Vec<MapEntry>, ApplicationError> {
        let equipment = self.store.list_equipment().await?;
        let mut locations_by_equipment = group_by_equipment(self.store.list_all_locations().await?);

        let mut entries = Vec::with_capacity(equipment.len());
        for item in &equipment {
            let mut locations = locations_by_equipment
                .remove(&item.equipment_id)
                .unwrap_or_default();
            locations.sort_by_key(|location| location.created_at);

            let records = EquipmentRecords {
                utilization: self.store.list_utilization_events(item.equipment_id).await?,
                power: self.store.list_power_records(item.equipment_id).await?,
                locations,
            };

            entries.push(MapEntry {
                summary: enrich(item, &records, None, &self.policy, &*self.clock),
                weekly_trend: weekly_trend(&records.utilization, &self.policy, &*self.clock),
                locations: records.locations,
            });
        }
        tracing::debug!(n_entries = entries.len(), "built map data");
        Ok(entries)
    }
}

fn group_by_equipment(locations: Vec<LocationRecord>) -> HashMap<EquipmentId, Vec<LocationRecord>> {
    let mut grouped: HashMap<EquipmentId, Vec<LocationRecord>> = HashMap::new();
    for location in locations {
        grouped.entry(location.equipment_id).or_default().push(location);
    }
    grouped
}
