use std::sync::Arc;

use crate::modules::equipment::adapters::outbound::equipment_store::EquipmentStore;
use crate::modules::equipment::core::summary::{EquipmentSummary, enrich};
use crate::modules::equipment::core::utilization::BaselinePolicy;
use crate::modules::equipment::use_cases::date_range::DateRangeParams;
use crate::modules::equipment::use_cases::errors::ApplicationError;
use crate::shared::core::clock::Clock;

pub struct GetEquipmentSummariesHandler<TStore>
where
    TStore: EquipmentStore + ?Sized + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
    policy: BaselinePolicy,
}

impl<TStore> GetEquipmentSummariesHandler<TStore>
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

    /// One summary per equipment, in store order. Any fetch failure fails the whole list.
    pub async fn handle(
        &self,
        params: &DateRangeParams,
    ) -> Result<Vec<EquipmentSummary>, ApplicationError> {
        let range = params.resolve(&*self.clock)?;
        let equipment = self.store.list_equipment().await?;
        tracing::debug!(n_equipment = equipment.len(), ?range, "summarising equipment");

        let mut summaries = Vec::with_capacity(equipment.len());
        for item in &equipment {
            let records = self.store.load_records(item.equipment_id).await?;
            summaries.push(enrich(item, &records, range, &self.policy, &*self.clock));
        }
        Ok(summaries)
    }
}
