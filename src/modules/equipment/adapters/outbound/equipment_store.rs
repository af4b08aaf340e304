// Port to the remote equipment store.
//
// Purpose
// - Describe the read operations the use cases need, without committing to a backend.
//
// Boundaries
// - No filtering or ordering guarantees; callers sort and window the records themselves.
// - Failures are reported as-is. Retries, if any, belong to the implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::equipment::core::records::{
    Equipment, EquipmentId, EquipmentRecords, LocationRecord, PowerRecord, UtilizationEvent,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("equipment store unavailable: {0}")]
    Unavailable(String),

    #[error("equipment store responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("equipment store returned an unreadable payload: {0}")]
    Decode(String),
}

#[async_trait]
pub trait EquipmentStore: Send + Sync {
    async fn list_equipment(&self) -> Result<Vec<Equipment>, StoreError>;

    async fn get_equipment(&self, equipment_id: EquipmentId)
    -> Result<Option<Equipment>, StoreError>;

    async fn list_utilization_events(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Vec<UtilizationEvent>, StoreError>;

    async fn list_power_records(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Vec<PowerRecord>, StoreError>;

    async fn list_location_records(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Vec<LocationRecord>, StoreError>;

    async fn list_all_locations(&self) -> Result<Vec<LocationRecord>, StoreError>;

    /// Fetch the three per-equipment record sets; the first failure aborts the load.
    async fn load_records(&self, equipment_id: EquipmentId) -> Result<EquipmentRecords, StoreError> {
        Ok(EquipmentRecords {
            utilization: self.list_utilization_events(equipment_id).await?,
            power: self.list_power_records(equipment_id).await?,
            locations: self.list_location_records(equipment_id).await?,
        })
    }
}
