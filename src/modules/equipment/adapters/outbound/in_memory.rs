// In memory equipment store.
//
// Purpose
// - Exercise the use cases and HTTP surface without a remote backend.
//
// Responsibilities
// - Hold seeded tables and answer the same reads the remote store does.
// - Simulate an unreachable backend via `toggle_offline`.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::equipment::adapters::outbound::equipment_store::{EquipmentStore, StoreError};
use crate::modules::equipment::core::records::{
    Equipment, EquipmentId, LocationRecord, PowerRecord, UtilizationEvent,
};

#[derive(Default)]
pub struct InMemoryEquipmentStore {
    equipment: RwLock<BTreeMap<EquipmentId, Equipment>>,
    utilization: RwLock<Vec<UtilizationEvent>>,
    power: RwLock<Vec<PowerRecord>>,
    locations: RwLock<Vec<LocationRecord>>,
    is_offline: bool,
}

impl InMemoryEquipmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert_equipment(&self, equipment: Equipment) {
        self.equipment
            .write()
            .await
            .insert(equipment.equipment_id, equipment);
    }

    pub async fn insert_utilization(&self, events: impl IntoIterator<Item = UtilizationEvent>) {
        self.utilization.write().await.extend(events);
    }

    pub async fn insert_power(&self, records: impl IntoIterator<Item = PowerRecord>) {
        self.power.write().await.extend(records);
    }

    pub async fn insert_locations(&self, records: impl IntoIterator<Item = LocationRecord>) {
        self.locations.write().await.extend(records);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Equipment store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EquipmentStore for InMemoryEquipmentStore {
    async fn list_equipment(&self) -> Result<Vec<Equipment>, StoreError> {
        self.ensure_online()?;
        Ok(self.equipment.read().await.values().cloned().collect())
    }

    async fn get_equipment(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Option<Equipment>, StoreError> {
        self.ensure_online()?;
        Ok(self.equipment.read().await.get(&equipment_id).cloned())
    }

    async fn list_utilization_events(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Vec<UtilizationEvent>, StoreError> {
        self.ensure_online()?;
        let guard = self.utilization.read().await;
        Ok(guard
            .iter()
            .filter(|event| event.equipment_id == equipment_id)
            .cloned()
            .collect())
    }

    async fn list_power_records(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Vec<PowerRecord>, StoreError> {
        self.ensure_online()?;
        let guard = self.power.read().await;
        Ok(guard
            .iter()
            .filter(|record| record.equipment_id == equipment_id)
            .cloned()
            .collect())
    }

    async fn list_location_records(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Vec<LocationRecord>, StoreError> {
        self.ensure_online()?;
        let guard = self.locations.read().await;
        Ok(guard
            .iter()
            .filter(|record| record.equipment_id == equipment_id)
            .cloned()
            .collect())
    }

    async fn list_all_locations(&self) -> Result<Vec<LocationRecord>, StoreError> {
        self.ensure_online()?;
        Ok(self.locations.read().await.clone())
    }
}
