use std::sync::Arc;

use crate::modules::equipment::adapters::outbound::equipment_store::EquipmentStore;
use crate::modules::equipment::core::records::EquipmentId;
use crate::modules::equipment::core::summary::{EquipmentSummary, enrich};
use crate::modules::equipment::core::utilization::BaselinePolicy;
use crate::modules::equipment::use_cases::date_range::DateRangeParams;
use crate::modules::equipment::use_cases::errors::ApplicationError;
use crate::shared::core::clock::Clock;

pub struct GetEquipmentSummaryHandler<TStore>
where
    TStore: EquipmentStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
    policy: BaselinePolicy,
}

impl<TStore> GetEquipmentSummaryHandler<TStore>
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

    pub async fn handle(
        &self,
        equipment_id: EquipmentId,
        params: &DateRangeParams,
    ) -> Result<EquipmentSummary, ApplicationError> {
        let range = params.resolve(&*self.clock)?;
        let equipment = self
            .store
            .get_equipment(equipment_id)
            .await?
            .ok_or(ApplicationError::NotFound { equipment_id })?;
        let records = self.store.load_records(equipment_id).await?;
        Ok(enrich(&equipment, &records, range, &self.policy, &*self.clock))
    }
}
