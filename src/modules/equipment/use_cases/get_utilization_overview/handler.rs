use std::sync::Arc;

use crate::modules::equipment::adapters::outbound::equipment_store::EquipmentStore;
use crate::modules::equipment::core::summary::UtilizationOverview;
use crate::modules::equipment::use_cases::date_range::DateRangeParams;
use crate::modules::equipment::use_cases::errors::ApplicationError;
use crate::modules::equipment::use_cases::get_equipment_summaries::handler::GetEquipmentSummariesHandler;

/// Dashboard rows: the full summaries with the location payload dropped.
pub struct GetUtilizationOverviewHandler<TStore>
where
    TStore: EquipmentStore + ?Sized + 'static,
{
    summaries: Arc<GetEquipmentSummariesHandler<TStore>>,
}

impl<TStore> GetUtilizationOverviewHandler<TStore>
where
    TStore: EquipmentStore + ?Sized + 'static,
{
    pub fn new(summaries: Arc<GetEquipmentSummariesHandler<TStore>>) -> Self {
        Self { summaries }
    }

    pub async fn handle(
        &self,
        params: &DateRangeParams,
    ) -> Result<Vec<UtilizationOverview>, ApplicationError> {
        let summaries = self.summaries.handle(params).await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
