use std::sync::Arc;

use crate::modules::equipment::adapters::outbound::equipment_store::EquipmentStore;
use crate::modules::equipment::core::utilization::BaselinePolicy;
use crate::modules::equipment::use_cases::get_equipment_summaries::handler::GetEquipmentSummariesHandler;
use crate::modules::equipment::use_cases::get_equipment_summary::handler::GetEquipmentSummaryHandler;
use crate::modules::equipment::use_cases::get_map_data::handler::GetMapDataHandler;
use crate::modules::equipment::use_cases::get_utilization_overview::handler::GetUtilizationOverviewHandler;
use crate::shared::core::clock::Clock;

#[derive(Clone)]
pub struct AppState {
    pub summaries: Arc<GetEquipmentSummariesHandler<dyn EquipmentStore>>,
    pub summary: Arc<GetEquipmentSummaryHandler<dyn EquipmentStore>>,
    pub overview: Arc<GetUtilizationOverviewHandler<dyn EquipmentStore>>,
    pub map_data: Arc<GetMapDataHandler<dyn EquipmentStore>>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn EquipmentStore>,
        clock: Arc<dyn Clock>,
        policy: BaselinePolicy,
    ) -> Self {
        let summaries = Arc::new(GetEquipmentSummariesHandler::new(
            store.clone(),
            clock.clone(),
            policy,
        ));
        Self {
            summary: Arc::new(GetEquipmentSummaryHandler::new(
                store.clone(),
                clock.clone(),
                policy,
            )),
            overview: Arc::new(GetUtilizationOverviewHandler::new(summaries.clone())),
            map_data: Arc::new(GetMapDataHandler::new(store, clock, policy)),
            summaries,
        }
    }
}
